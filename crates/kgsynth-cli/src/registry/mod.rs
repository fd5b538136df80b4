mod atomic;
mod logging;
mod run;

pub use atomic::{write_atomic, write_bytes_atomic, write_json_atomic};
pub use logging::init_logging;
pub use run::{
    RunContext, RunManifest, config_fingerprint, manifest_path, report_path,
};

use thiserror::Error;

/// Registry-level errors for run artifacts.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
