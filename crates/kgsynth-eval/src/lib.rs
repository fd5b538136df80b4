//! Evaluation helpers for generated scholarly graphs.

pub mod authorship;
pub mod errors;
pub mod graph_metrics;
pub mod report;

pub use authorship::{
    AuthorshipReport, AuthorshipViolation, ViolationKind, check_authorships,
};
pub use errors::EvalError;
pub use graph_metrics::{
    EntityCounts, GraphMetrics, LiteralCounts, METRICS_VERSION, collect_graph_metrics,
};
pub use report::render_report;
