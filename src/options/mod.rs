//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (free flight, focus orbit, simulation pacing,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! presets stored in `assets/presets/`.

mod flight;
mod focus;
mod keybindings;
mod simulation;

use std::path::Path;

pub use flight::FlightOptions;
pub use focus::FocusOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationOptions;

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[flight]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-flight movement and look parameters.
    pub flight: FlightOptions,
    /// Focus autopilot orbit and transition parameters.
    pub focus: FocusOptions,
    /// Orbital and spin pacing constants.
    pub simulation: SimulationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read and
    /// [`OrreryError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        // The reverse lookup map is not serialized.
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] on write failure and
    /// [`OrreryError::OptionsParse`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[flight]
base_speed = 80.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.flight.base_speed, 80.0);
        // Everything else should be default
        assert_eq!(opts.flight.boost_multiplier, 5.0);
        assert_eq!(opts.focus.orbit_radius_ratio, 3.0);
    }

    #[test]
    fn presets_round_trip_through_disk() {
        let dir = std::env::temp_dir().join("orrery-preset-tests");
        let path = dir.join("fast.toml");

        let mut opts = Options::default();
        opts.flight.base_speed = 120.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        // The reverse keybinding map is rebuilt on load.
        assert_eq!(
            loaded.keybindings.lookup("KeyW"),
            Some(crate::input::Action::Forward)
        );

        assert!(Options::list_presets(&dir).contains(&"fast".to_owned()));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn easing_parses_from_snake_case() {
        use crate::util::easing::EasingFunction;

        let toml_str = r#"
[focus]
transition_easing = "linear"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.focus.transition_easing, EasingFunction::Linear);
        assert_eq!(
            Options::default().focus.transition_easing,
            EasingFunction::CubicInOut
        );
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::Action;
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(Action::Forward));
        assert_eq!(opts.keybindings.lookup("KeyF"), Some(Action::Focus));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("flight"));
        assert!(props.contains_key("focus"));
        assert!(props.contains_key("simulation"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));
    }
}
