//! Control configuration with TOML preset support.
//!
//! All tweakable behavior toggles live here and serialize to/from TOML, so
//! hosts can ship navigation presets. Every field has a default; partial
//! files that only override one key parse fine.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::control::Subscriptions;
use crate::error::VantageError;
use crate::input::KeyboardLayout;

/// Behavior toggles for [`CameraControl`](crate::control::CameraControl).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ControlConfig {
    /// Rotate the look point about the eye instead of orbiting the eye
    /// about the look point.
    pub first_person: bool,
    /// Pin the eye's vertical position during pans and first-person zooms.
    pub walking: bool,
    /// Which letter keys drive panning and yaw.
    pub keyboard_layout: KeyboardLayout,
    /// Fly the camera to the picked entity on double pick. On by default.
    pub double_pick_fly_to: bool,
    /// Which event families the host observes.
    pub subscriptions: Subscriptions,
}

impl ControlConfig {
    /// Defaults: orbit navigation, QWERTY, double-pick fly-to on, no
    /// subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything observes double picks. When false, single clicks
    /// resolve immediately instead of waiting out the double-click window.
    #[must_use]
    pub fn double_aware(&self) -> bool {
        self.double_pick_fly_to || self.subscriptions.any_double()
    }

    /// Generate a JSON Schema describing the configuration surface.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControlConfig)
    }

    /// Load a configuration from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::ConfigIo)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::ConfigParse(e.to_string()))
    }

    /// Save the configuration to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::ConfigSerialize(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::ConfigIo)?;
        }
        std::fs::write(path, content).map_err(VantageError::ConfigIo)
    }
}

// Fly-to defaults on, so the derive cannot supply this. Partial TOML files
// fill missing fields from here via `#[serde(default)]`.
impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            first_person: false,
            walking: false,
            keyboard_layout: KeyboardLayout::default(),
            double_pick_fly_to: true,
            subscriptions: Subscriptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_trips_through_toml() {
        let config = ControlConfig::new();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ControlConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
keyboard_layout = "azerty"

[subscriptions]
hover = true
"#;
        let config: ControlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.keyboard_layout, KeyboardLayout::Azerty);
        assert!(config.subscriptions.hover);
        // Everything else stays default, including fly-to staying on.
        assert!(!config.first_person);
        assert!(!config.subscriptions.hover_out);
        assert!(config.double_pick_fly_to);
    }

    #[test]
    fn default_keeps_fly_to_on() {
        assert!(ControlConfig::default().double_pick_fly_to);
        assert_eq!(ControlConfig::default(), ControlConfig::new());
        let empty: ControlConfig = toml::from_str("").unwrap();
        assert!(empty.double_pick_fly_to);
    }

    #[test]
    fn double_awareness_tracks_flags() {
        let mut config = ControlConfig::new();
        assert!(config.double_aware());
        config.double_pick_fly_to = false;
        assert!(!config.double_aware());
        config.subscriptions.double_picked = true;
        assert!(config.double_aware());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema = ControlConfig::json_schema();
        let props = schema
            .as_value()
            .get("properties")
            .and_then(|p| p.as_object())
            .unwrap();
        assert!(props.contains_key("first_person"));
        assert!(props.contains_key("keyboard_layout"));
        assert!(props.contains_key("subscriptions"));
    }
}
