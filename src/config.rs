//! Application settings, read from an optional JSON file.
//!
//! Every field has a default, so `{}` is a valid config:
//!
//! ```json
//! {
//!   "endpoint": "http://localhost:5000/train",
//!   "seed": 42,
//!   "window_width": 1280.0,
//!   "window_height": 900.0,
//!   "visualization_height": 600.0
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlaygroundError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/train";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Training service URL.
    pub endpoint: String,
    /// Seed for placeholder values; entropy when absent.
    pub seed: Option<u64>,
    pub window_width: f32,
    pub window_height: f32,
    /// Height of the diagram area.
    pub visualization_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            seed: None,
            window_width: 1280.0,
            window_height: 900.0,
            visualization_height: 600.0,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PlaygroundError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PlaygroundError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "seed": 9, "visualization_height": 420.0 }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.visualization_height, 420.0);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
