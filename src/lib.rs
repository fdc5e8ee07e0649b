// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D orrery flythrough.
//!
//! Orrery simulates a set of orbiting celestial bodies and lets a viewer
//! pilot a virtual camera through them, either by direct inertial free
//! flight (pointer look + keyed movement) or by an automatic focus orbit
//! around a chosen body with a smooth entry transition.
//!
//! # Key entry points
//!
//! - [`engine::OrreryEngine`] - the per-frame driving loop
//! - [`body::BodyCatalog`] - orbital bodies and their positions
//! - [`camera::NavigationRig`] - free-flight / focus mode arbitration
//! - [`options::Options`] - runtime configuration (flight, focus,
//!   simulation, keybindings)
//!
//! # Architecture
//!
//! Data flows one way per frame: clock → body positions → whichever
//! controller currently drives the camera → camera pose and a
//! [`camera::NavReadout`] for the presentation layer. Everything is
//! single-threaded and frame-driven; all integration multiplies by the
//! frame delta, so behavior is frame-rate independent.

pub mod body;
pub mod camera;
pub mod engine;
mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::OrreryError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
