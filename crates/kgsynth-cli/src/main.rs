mod registry;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kgsynth_config::{
    ConfigError, ValidatedConfig, ValidationReport, config_json_schema, parse_config_toml,
    validate_config,
};
use kgsynth_eval::{EvalError, check_authorships, collect_graph_metrics, render_report};
use kgsynth_generate::{GenerateOptions, GenerationEngine, GenerationError, OutputFormat};
use registry::{
    RunContext, RunManifest, config_fingerprint, init_logging, manifest_path, report_path,
    write_atomic, write_bytes_atomic, write_json_atomic,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid UTF-8: {0}")]
    Encoding(std::str::Utf8Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "kgsynth", version, about = "Synthetic scholarly knowledge-graph generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a graph from a parameter file.
    Generate(GenerateArgs),
    /// Validate a parameter file without generating.
    Validate(ValidateArgs),
    /// Print the JSON Schema of the parameter file.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Parameter file (TOML).
    #[arg(long, value_name = "PATH")]
    config: PathBuf,
    /// Output path; defaults to `graph.<ext>` for the chosen format.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format: turtle | ntriples. Inferred from `--out` when omitted.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Seed override; takes precedence over the parameter file.
    #[arg(long)]
    seed: Option<u64>,
    /// Append JSON log lines to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Skip the run manifest and markdown report.
    #[arg(long, default_value_t = false)]
    no_manifest: bool,
    /// Fail when the generated graph breaks an authorship invariant.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Parameter file (TOML).
    #[arg(value_name = "PATH")]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Write the schema here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        out,
        format,
        seed,
        log_file,
        no_manifest,
        strict,
    } = args;

    init_logging(log_file.as_deref())?;

    let format = match (format, out.as_deref()) {
        (Some(format), _) => format,
        (None, Some(path)) => format_from_extension(path)?,
        (None, None) => OutputFormat::default(),
    };
    let out = out.unwrap_or_else(|| PathBuf::from(format!("graph.{}", format.extension())));

    let contents = std::fs::read(&config)?;
    let run_ctx = RunContext {
        run_id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now(),
        config_path: config.clone(),
        config_fingerprint: config_fingerprint(&contents),
    };
    tracing::info!(
        event = "run_started",
        run_id = %run_ctx.run_id,
        config = %config.display(),
        fingerprint = %run_ctx.config_fingerprint
    );

    let validated = load_validated(&contents)?;
    for warning in &validated.warnings {
        tracing::warn!(
            event = "config_warning",
            code = %warning.code,
            path = %warning.path,
            message = %warning.message
        );
    }

    let engine = GenerationEngine::new(GenerateOptions { seed });
    let result = engine.run(&validated.config)?;

    let metrics = collect_graph_metrics(&result.store);
    let authorships = check_authorships(&result.store);
    if !authorships.is_clean() {
        tracing::warn!(
            event = "authorship_violations",
            count = authorships.violations.len()
        );
    }
    let authorships = if strict {
        authorships.into_result()?
    } else {
        authorships
    };

    let bytes = write_atomic(&out, |file| format.write(&result.store, file))?;
    tracing::info!(event = "graph_written", path = %out.display(), bytes, format = format.extension());

    if !no_manifest {
        let report = render_report(&metrics, &authorships, 20);
        write_bytes_atomic(&report_path(&out), report.as_bytes())?;

        let manifest = RunManifest::new(
            &run_ctx,
            result.seed,
            format,
            &out,
            bytes,
            result.summary.clone(),
            metrics,
            authorships,
        );
        let path = manifest_path(&out);
        write_json_atomic(&path, &manifest)?;
        tracing::info!(event = "manifest_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        seed = result.seed,
        duration_ms = result.summary.duration_ms
    );
    println!("{}", result.summary);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let contents = std::fs::read(&args.config)?;
    let validated = load_validated(&contents)?;
    for warning in &validated.warnings {
        println!("warning {warning}");
    }
    println!(
        "ok {} ({} warning(s))",
        args.config.display(),
        validated.warnings.len()
    );
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = config_json_schema();
    match args.out {
        Some(path) => write_json_atomic(&path, &schema)?,
        None => println!("{}", serde_json::to_string_pretty(&schema)?),
    }
    Ok(())
}

/// Parse and validate; every error issue is printed before failing.
fn load_validated(contents: &[u8]) -> Result<ValidatedConfig, CliError> {
    let text = std::str::from_utf8(contents).map_err(|err| {
        eprintln!("error config is not valid UTF-8: {err}");
        CliError::Encoding(err)
    })?;
    let value = parse_config_toml(text)?;
    validate_config(&value).map_err(|report: ValidationReport| {
        for issue in &report.errors {
            eprintln!("error {issue}");
        }
        CliError::Config(ConfigError::Invalid(report))
    })
}

fn format_from_extension(path: &Path) -> Result<OutputFormat, CliError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();
    extension.parse().map_err(|_| {
        CliError::InvalidArgument(format!(
            "cannot infer output format from '{}'; pass --format",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_inferred_from_known_extensions() {
        assert!(matches!(
            format_from_extension(Path::new("out/graph.nt")),
            Ok(OutputFormat::NTriples)
        ));
        assert!(matches!(
            format_from_extension(Path::new("graph.ttl")),
            Ok(OutputFormat::Turtle)
        ));
        assert!(matches!(
            format_from_extension(Path::new("graph.rdf")),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn config_with_invalid_utf8_is_rejected() {
        let mut contents = b"seed = 1\n# caf".to_vec();
        contents.extend_from_slice(&[0xE9, b'\n']);
        assert!(matches!(
            load_validated(&contents),
            Err(CliError::Encoding(_))
        ));
    }

    #[test]
    fn generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "kgsynth",
            "generate",
            "--config",
            "configs/sample.toml",
            "--format",
            "nt",
            "--seed",
            "5",
            "--no-manifest",
        ])
        .expect("parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, Some(OutputFormat::NTriples));
        assert_eq!(args.seed, Some(5));
        assert!(args.no_manifest);
    }
}
