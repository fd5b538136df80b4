use std::fs;
use std::path::{Path, PathBuf};

use kgsynth_config::{
    ConfigError, GeneratorConfig, load_config, parse_config_toml, validate_config,
    validate_config_semantics,
};

fn config_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("../../configs/{name}"))
}

fn load_value(name: &str) -> serde_json::Value {
    let path = config_path(name);
    let contents =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing config at {}", path.display()));
    parse_config_toml(&contents).expect("parse toml")
}

fn minimal_config() -> GeneratorConfig {
    serde_json::from_value(load_value("minimal.toml")).expect("typed config")
}

#[test]
fn sample_config_validates() {
    let validated = load_config(&config_path("sample.toml")).expect("sample config is valid");
    assert!(validated.warnings.is_empty(), "unexpected warnings");
    assert_eq!(validated.config.content.languages, vec!["en", "de", "fr"]);
    assert_eq!(validated.config.seed, Some(20200101));
}

#[test]
fn minimal_config_fills_defaults() {
    let validated = validate_config(&load_value("minimal.toml")).expect("minimal config is valid");
    let config = validated.config;
    assert_eq!(config.content.title_length.min, 10);
    assert_eq!(config.content.description_length.max, 1000);
    assert_eq!(config.shape.years.min, 1979);
    assert!((config.coauthors.mean - 3.0).abs() < f64::EPSILON);
    assert_eq!(config.activities.projects.count, 0);
    assert!(!config.content.legacy_first_char_drop);
}

#[test]
fn unknown_field_is_a_structural_error() {
    let mut value = load_value("minimal.toml");
    value["site"]["colour"] = serde_json::json!("blue");

    let report = validate_config(&value).expect_err("unknown field rejected");
    assert!(report.has_code("schema_violation"));
}

#[test]
fn missing_section_is_a_structural_error() {
    let mut value = load_value("minimal.toml");
    value
        .as_object_mut()
        .expect("object")
        .remove("vocabulary");

    let report = validate_config(&value).expect_err("missing vocabulary rejected");
    assert!(report.has_code("schema_violation"));
}

#[test]
fn inverted_range_is_rejected() {
    let mut config = minimal_config();
    config.shape.faculty_per_department.min = 5;
    config.shape.faculty_per_department.max = 2;

    let report = validate_config_semantics(&config);
    assert!(!report.is_ok());
    assert_eq!(report.errors[0].code, "invalid_range");
    assert_eq!(report.errors[0].path, "/shape/faculty_per_department");
}

#[test]
fn zero_weight_distribution_is_degenerate() {
    let mut config = minimal_config();
    for entry in &mut config.works.types {
        entry.weight = 0.0;
    }

    let report = validate_config_semantics(&config);
    assert!(report.has_code("degenerate_distribution"));
}

#[test]
fn negative_weight_is_rejected() {
    let mut config = minimal_config();
    config.works.types[0].weight = -1.0;

    let report = validate_config_semantics(&config);
    assert!(report.has_code("invalid_weight"));
}

#[test]
fn missing_corpus_for_language_is_rejected() {
    let mut config = minimal_config();
    config.content.languages.push("de".to_string());

    let report = validate_config_semantics(&config);
    assert!(report.has_code("missing_corpus"));
}

#[test]
fn corpus_too_short_for_offset_and_length_is_rejected() {
    let mut config = minimal_config();
    config.content.languages.push("de".to_string());
    config
        .content
        .corpus
        .insert("de".to_string(), "kurzer Text".to_string());

    let report = validate_config_semantics(&config);
    assert!(report.has_code("short_corpus"));
    assert!(!report.has_code("missing_corpus"));

    let primary = config.content.corpus["en"].chars().count();
    let longest = config
        .content
        .title_length
        .max
        .max(config.content.description_length.max) as usize;
    config
        .content
        .corpus
        .insert("de".to_string(), "wort ".repeat((primary / 2 + longest) / 5 + 1));
    assert!(!validate_config_semantics(&config).has_code("short_corpus"));
}

#[test]
fn localized_lists_must_align() {
    let mut config = minimal_config();
    config.vocabulary.college_names.insert(
        "de".to_string(),
        vec!["Fakultät A".to_string(), "Fakultät B".to_string()],
    );

    let report = validate_config_semantics(&config);
    assert!(report.has_code("localized_length_mismatch"));
}

#[test]
fn light_tail_exponent_is_rejected() {
    let mut config = minimal_config();
    config.shape.productivity.shape_a = 1.0;

    let report = validate_config_semantics(&config);
    assert!(report.has_code("invalid_shape"));
}

#[test]
fn namespace_without_host_is_rejected() {
    let mut config = minimal_config();
    config.site.namespace = String::new();

    let report = validate_config_semantics(&config);
    assert!(report.has_code("invalid_namespace"));
}

#[test]
fn empty_journals_is_only_a_warning() {
    let mut config = minimal_config();
    config.vocabulary.journals.clear();

    let report = validate_config_semantics(&config);
    assert!(report.is_ok());
    assert!(report.has_code("empty_reference_pool"));
}

#[test]
fn load_config_surfaces_report_on_failure() {
    let dir = std::env::temp_dir().join(format!("kgsynth_config_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("broken.toml");
    let broken = fs::read_to_string(config_path("minimal.toml"))
        .expect("read minimal")
        .replace("min = 1, max = 1 }\ndepartments", "min = 3, max = 1 }\ndepartments");
    fs::write(&path, broken).expect("write broken config");

    match load_config(&path) {
        Err(ConfigError::Invalid(report)) => assert!(report.has_code("invalid_range")),
        other => panic!("expected invalid config, got {other:?}"),
    }
}
