//! Parameter file contracts and validation for kgsynth.
//!
//! The parameter file is TOML. It is checked structurally against the JSON
//! Schema derived from [`GeneratorConfig`], then semantically (ranges,
//! vocabularies, distributions) before any generation starts.

pub mod errors;
pub mod model;
pub mod schema;
pub mod validate;

pub use errors::{ConfigError, IssueSeverity, Result, ValidationIssue, ValidationReport};
pub use model::{
    ActivityConfig, CoauthorConfig, ContentConfig, CountRange, EquipmentConfig, EventConfig,
    GeneratorConfig, GrantConfig, ProductivityConfig, ProjectConfig, ShapeConfig, SiteConfig,
    VocabularyConfig, WorkConfig, WorkTypeWeight,
};
pub use schema::config_json_schema;
pub use validate::{
    ValidatedConfig, load_config, parse_config_toml, site_authority, validate_config,
    validate_config_json, validate_config_semantics,
};
