use std::path::PathBuf;
use thiserror::Error;

use crate::journal::LifecycleCounts;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Failed to read settings file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Lifecycle out of balance: expected {expected}, got {actual}")]
    Unbalanced {
        expected: LifecycleCounts,
        actual: LifecycleCounts,
    },
}

impl LifecycleError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LifecycleError::ConfigRead { .. } | LifecycleError::ConfigParse { .. } => 1,
            LifecycleError::Unbalanced { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
