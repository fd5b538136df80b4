use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::JSONSchema;
use regex::Regex;
use serde_json::Value;

use crate::errors::{ConfigError, IssueSeverity, ValidationIssue, ValidationReport};
use crate::model::{CountRange, GeneratorConfig};
use crate::schema::config_json_schema;

/// Validated configuration with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: GeneratorConfig,
    pub warnings: Vec<ValidationIssue>,
}

/// Parse TOML text into a JSON value ready for structural validation.
pub fn parse_config_toml(text: &str) -> Result<Value, ConfigError> {
    let value: Value = toml::from_str(text)?;
    Ok(value)
}

/// Read, parse and validate a parameter file.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let value = parse_config_toml(&text)?;
    validate_config(&value).map_err(ConfigError::Invalid)
}

/// Host part of the site namespace, used as the email domain.
pub fn site_authority(namespace: &str) -> Option<String> {
    static AUTHORITY: OnceLock<Option<Regex>> = OnceLock::new();
    let regex = AUTHORITY
        .get_or_init(|| Regex::new(r"^(?:https?://)?(?:[^@\n]+@)?(?:www\.)?([^:/\n?]+)").ok())
        .as_ref()?;
    regex
        .captures(namespace)
        .and_then(|captures| captures.get(1))
        .map(|authority| authority.as_str().to_string())
}

/// Validate a configuration JSON document against the config JSON Schema.
pub fn validate_config_json(
    config_json: &Value,
    config_schema: &Value,
) -> Result<ValidationReport, ConfigError> {
    let compiled =
        JSONSchema::compile(config_schema).map_err(|err| ConfigError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(config_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    Ok(report)
}

/// Validate the configuration end-to-end, returning structured issues on failure.
pub fn validate_config(config_json: &Value) -> Result<ValidatedConfig, ValidationReport> {
    let schema = match serde_json::to_value(config_json_schema()) {
        Ok(schema) => schema,
        Err(err) => return Err(single_error("schema_serialization_error", err.to_string())),
    };

    let structural = match validate_config_json(config_json, &schema) {
        Ok(report) => report,
        Err(err) => return Err(single_error("schema_validation_error", err.to_string())),
    };

    if !structural.is_ok() {
        return Err(structural);
    }

    let config: GeneratorConfig = match serde_json::from_value(config_json.clone()) {
        Ok(config) => config,
        Err(err) => return Err(single_error("invalid_config", err.to_string())),
    };

    let semantic = validate_config_semantics(&config);
    if !semantic.is_ok() {
        return Err(semantic);
    }

    Ok(ValidatedConfig {
        config,
        warnings: semantic.warnings,
    })
}

/// Check ranges, vocabularies and distributions of a typed configuration.
pub fn validate_config_semantics(config: &GeneratorConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_site(config, &mut report);
    validate_content(config, &mut report);
    validate_vocabulary(config, &mut report);
    validate_ranges(config, &mut report);
    validate_distributions(config, &mut report);

    report
}

fn validate_site(config: &GeneratorConfig, report: &mut ValidationReport) {
    if config.site.namespace.trim().is_empty() || site_authority(&config.site.namespace).is_none()
    {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_namespace",
            "/site/namespace",
            format!("namespace '{}' has no host part", config.site.namespace),
            Some("use an absolute URL such as http://vivo.example.edu/individual/".to_string()),
        ));
    }

    if !config.content.languages.contains(&config.site.lang) {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "primary_lang_not_in_content",
            "/site/lang",
            format!(
                "primary language '{}' is not one of the content languages",
                config.site.lang
            ),
            None,
        ));
    }
}

fn validate_content(config: &GeneratorConfig, report: &mut ValidationReport) {
    let content = &config.content;
    if content.languages.is_empty() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "no_languages",
            "/content/languages",
            "at least one content language is required".to_string(),
            None,
        ));
    }

    for (idx, language) in content.languages.iter().enumerate() {
        match content.corpus.get(language) {
            None => report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "missing_corpus",
                format!("/content/languages/{idx}"),
                format!("no corpus configured for language '{language}'"),
                Some(format!("add content.corpus.{language}")),
            )),
            Some(corpus) if corpus.trim().is_empty() => report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_corpus",
                format!("/content/corpus/{language}"),
                format!("corpus for language '{language}' is empty"),
                None,
            )),
            Some(_) => {}
        }
    }

    check_range(&content.title_length, "/content/title_length", report);
    check_range(&content.description_length, "/content/description_length", report);

    // Texts are cut at an offset of up to half the primary corpus.
    let Some(primary) = content
        .languages
        .first()
        .and_then(|language| content.corpus.get(language))
    else {
        return;
    };
    let longest = content.title_length.max.max(content.description_length.max) as usize;
    let required = primary.chars().count() / 2 + longest;
    for language in &content.languages {
        let Some(corpus) = content.corpus.get(language) else {
            continue;
        };
        let available = corpus.chars().count();
        if available < required {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "short_corpus",
                format!("/content/corpus/{language}"),
                format!(
                    "corpus for language '{language}' has {available} characters; \
                     at least {required} are needed for texts of up to {longest}"
                ),
                Some("lengthen the corpus or lower the maximum text length".to_string()),
            ));
        }
    }
}

fn validate_vocabulary(config: &GeneratorConfig, report: &mut ValidationReport) {
    let vocabulary = &config.vocabulary;
    for (name, values) in [
        ("first_names", &vocabulary.first_names),
        ("last_names", &vocabulary.last_names),
        ("titles", &vocabulary.titles),
    ] {
        if values.iter().all(|value| value.trim().is_empty()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_vocabulary",
                format!("/vocabulary/{name}"),
                format!("{name} must contain at least one non-empty entry"),
                None,
            ));
        }
    }

    for (name, values) in [
        ("concepts", &vocabulary.concepts),
        ("journals", &vocabulary.journals),
    ] {
        if values.is_empty() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "empty_reference_pool",
                format!("/vocabulary/{name}"),
                format!("{name} is empty; works that need one will fail"),
                None,
            ));
        }
    }

    validate_localized(
        "college_names",
        &vocabulary.college_names,
        &config.site.lang,
        report,
    );
    validate_localized(
        "department_names",
        &vocabulary.department_names,
        &config.site.lang,
        report,
    );
}

fn validate_localized(
    name: &str,
    names: &BTreeMap<String, Vec<String>>,
    primary: &str,
    report: &mut ValidationReport,
) {
    let Some(primary_names) = names.get(primary).filter(|names| !names.is_empty()) else {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "empty_vocabulary",
            format!("/vocabulary/{name}"),
            format!("{name} needs a non-empty list for primary language '{primary}'"),
            Some(format!("add vocabulary.{name}.{primary}")),
        ));
        return;
    };

    for (language, translated) in names {
        if translated.len() != primary_names.len() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "localized_length_mismatch",
                format!("/vocabulary/{name}/{language}"),
                format!(
                    "{name}.{language} has {} entries but {name}.{primary} has {}",
                    translated.len(),
                    primary_names.len()
                ),
                Some("localized lists are index-aligned translations".to_string()),
            ));
        }
    }
}

fn validate_ranges(config: &GeneratorConfig, report: &mut ValidationReport) {
    let shape = &config.shape;
    check_range(
        &shape.colleges_per_university,
        "/shape/colleges_per_university",
        report,
    );
    check_range(
        &shape.departments_per_college,
        "/shape/departments_per_college",
        report,
    );
    check_range(
        &shape.faculty_per_department,
        "/shape/faculty_per_department",
        report,
    );
    check_range(&shape.works_per_faculty, "/shape/works_per_faculty", report);
    check_range(&shape.years, "/shape/years", report);

    let works = &config.works;
    check_range(&works.volume, "/works/volume", report);
    check_range(&works.issue, "/works/issue", report);
    check_range(&works.start_page, "/works/start_page", report);
    check_range(&works.page_span, "/works/page_span", report);

    let activities = &config.activities;
    check_range(
        &activities.projects.participants,
        "/activities/projects/participants",
        report,
    );
    check_range(
        &activities.projects.produced_works,
        "/activities/projects/produced_works",
        report,
    );
    check_range(
        &activities.grants.administering_colleges,
        "/activities/grants/administering_colleges",
        report,
    );
    check_range(
        &activities.grants.funded_projects,
        "/activities/grants/funded_projects",
        report,
    );
    check_range(
        &activities.grants.supported_works,
        "/activities/grants/supported_works",
        report,
    );
    check_range(
        &activities.equipment.equipped_colleges,
        "/activities/equipment/equipped_colleges",
        report,
    );
    check_range(&config.events.participants, "/events/participants", report);
}

fn validate_distributions(config: &GeneratorConfig, report: &mut ValidationReport) {
    let types = &config.works.types;
    if types.is_empty() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "degenerate_distribution",
            "/works/types",
            "at least one work type is required".to_string(),
            None,
        ));
    }

    let mut total = 0.0;
    for (idx, entry) in types.iter().enumerate() {
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "invalid_weight",
                format!("/works/types/{idx}/weight"),
                format!("weight {} must be a finite non-negative number", entry.weight),
                None,
            ));
        } else {
            total += entry.weight;
        }
    }
    if !types.is_empty() && total <= 0.0 {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "degenerate_distribution",
            "/works/types",
            "work type weights sum to zero".to_string(),
            Some("give at least one work type a positive weight".to_string()),
        ));
    }

    let productivity = &config.shape.productivity;
    for (name, shape) in [
        ("shape_a", productivity.shape_a),
        ("shape_b", productivity.shape_b),
    ] {
        if !shape.is_finite() || shape <= 1.0 {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "invalid_shape",
                format!("/shape/productivity/{name}"),
                format!("heavy-tail exponent {shape} must be greater than 1"),
                None,
            ));
        }
    }

    let mean = config.coauthors.mean;
    if !mean.is_finite() || mean < 0.0 {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_mean",
            "/coauthors/mean",
            format!("co-author mean {mean} must be a finite non-negative number"),
            None,
        ));
    }
}

fn check_range(range: &CountRange, path: &str, report: &mut ValidationReport) {
    if !range.is_valid() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_range",
            path,
            format!("min {} is greater than max {}", range.min, range.max),
            None,
        ));
    }
}

fn single_error(code: &str, message: String) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.push_error(ValidationIssue::new(
        IssueSeverity::Error,
        code,
        "/",
        message,
        None,
    ));
    report
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
