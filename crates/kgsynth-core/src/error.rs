use thiserror::Error;

/// Core error type shared across kgsynth crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup pattern does not have the shape the store supports.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Convenience alias for results returned by kgsynth crates.
pub type Result<T> = std::result::Result<T, Error>;
