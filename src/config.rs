// Settings, loaded from an optional TOML file.
//
// Every field has a default, and the defaults reproduce the classic trace.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{LifecycleError, Result};

/// Names the settings file; unset means defaults.
pub const CONFIG_ENV: &str = "LAMBDA_LIFECYCLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Printed by the capture-less closure.
    pub greeting: String,
    /// Captured by value in `closure_example`.
    pub captured_number: i32,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            greeting: "Hello world".to_string(),
            captured_number: 5,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(source: &str, origin: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| LifecycleError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LifecycleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Settings::default()),
        }
    }
}
