//! Binary entry point for the interactive orrery viewer.

use std::path::Path;

use orrery::{body, options::Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => {
                log::info!("loaded options from {path}");
                opts
            }
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let catalog = match body::solar_system() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("failed to build the solar system catalog: {e}");
            std::process::exit(1);
        }
    };

    let result = Viewer::builder()
        .with_catalog(catalog)
        .with_options(options)
        .build()
        .run();

    if let Err(e) = result {
        log::error!("viewer exited with an error: {e}");
        std::process::exit(1);
    }
}
