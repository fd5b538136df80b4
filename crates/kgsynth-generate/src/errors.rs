use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration that cannot drive generation; raised before any fact is emitted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot sample from empty pool '{pool}'")]
    EmptyPool { pool: &'static str },
    #[error("exclusion set covers every candidate in pool '{pool}'")]
    ExclusionCoversPool { pool: &'static str },
    #[error("identifier space exhausted for kind '{kind}'")]
    IdentifierSpaceExhausted { kind: &'static str },
    #[error("work '{work}' has no rank-1 authorship")]
    MissingAuthorship { work: String },
    #[error("store error: {0}")]
    Store(#[from] kgsynth_core::Error),
}
