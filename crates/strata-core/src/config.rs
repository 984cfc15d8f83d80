// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Startup settings of an [`Application`](crate::application::Application).
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Title of the main window.
    pub title: String,
    /// Initial client width, in pixels.
    pub width: u32,
    /// Initial client height, in pixels.
    pub height: u32,
    /// Whether presentation waits for vertical sync.
    pub vsync: bool,
    /// RGBA color the framebuffer is cleared to every frame.
    pub clear_color: [f32; 4],
    /// Whether the debug overlay shows its stats window.
    pub show_debug_window: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: "Strata Engine".to_owned(),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: [0.2, 0.2, 0.2, 1.0],
            show_debug_window: true,
        }
    }
}

impl ApplicationConfig {
    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Failure to load or save an [`ApplicationConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    Io(std::io::Error),
    /// The document is not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ApplicationConfig::from_json(r#"{ "title": "Demo", "vsync": false }"#)
            .expect("valid config");
        assert_eq!(config.title, "Demo");
        assert!(!config.vsync);
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.clear_color, [0.2, 0.2, 0.2, 1.0]);
        assert!(config.show_debug_window);
    }

    #[test]
    fn empty_object_is_the_default() {
        let config = ApplicationConfig::from_json("{}").unwrap();
        assert_eq!(config, ApplicationConfig::default());
    }

    #[test]
    fn json_round_trip() {
        let config = ApplicationConfig {
            width: 640,
            height: 480,
            clear_color: [1.0, 0.0, 0.5, 1.0],
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(ApplicationConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ApplicationConfig::from_json(r#"{ "width": "wide" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("strata-config-that-does-not-exist.json");
        let err = ApplicationConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "strata-config-round-trip-{}.json",
            std::process::id()
        ));
        let config = ApplicationConfig {
            title: "Saved".to_owned(),
            ..Default::default()
        };
        config.to_file(&path).unwrap();
        let loaded = ApplicationConfig::from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
