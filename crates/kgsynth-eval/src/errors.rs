use thiserror::Error;

/// Errors emitted by the graph evaluator.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("authorship check failed with {0} violation(s)")]
    Violations(u64),
}
