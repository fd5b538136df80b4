use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use kgsynth_eval::{AuthorshipReport, GraphMetrics};
use kgsynth_generate::{GenerationSummary, OutputFormat};

pub const ARTIFACT_VERSION: &str = "0.1";
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArtifactStatus {
    Ok,
    Error,
}

/// Metadata captured at run start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub config_path: PathBuf,
    pub config_fingerprint: String,
}

/// JSON manifest written next to the generated graph.
#[derive(Debug, Serialize)]
pub struct RunManifest {
    pub run_id: String,
    pub status: ArtifactStatus,
    pub artifact_version: String,
    pub cli_version: String,
    pub created_at: String,
    pub finished_at: String,
    pub config_path: String,
    pub config_fingerprint: String,
    pub seed: u64,
    pub format: OutputFormat,
    pub output_path: String,
    pub output_bytes: u64,
    pub summary: GenerationSummary,
    pub metrics: GraphMetrics,
    pub authorships: AuthorshipReport,
}

impl RunManifest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ctx: &RunContext,
        seed: u64,
        format: OutputFormat,
        output_path: &Path,
        output_bytes: u64,
        summary: GenerationSummary,
        metrics: GraphMetrics,
        authorships: AuthorshipReport,
    ) -> Self {
        let status = if authorships.is_clean() {
            ArtifactStatus::Ok
        } else {
            ArtifactStatus::Error
        };
        Self {
            run_id: ctx.run_id.clone(),
            status,
            artifact_version: ARTIFACT_VERSION.to_string(),
            cli_version: CLI_VERSION.to_string(),
            created_at: ctx.started_at.to_rfc3339(),
            finished_at: Utc::now().to_rfc3339(),
            config_path: ctx.config_path.display().to_string(),
            config_fingerprint: ctx.config_fingerprint.clone(),
            seed,
            format,
            output_path: output_path.display().to_string(),
            output_bytes,
            summary,
            metrics,
            authorships,
        }
    }
}

/// Hex SHA-256 of the raw parameter file.
pub fn config_fingerprint(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    hex::encode(hasher.finalize())
}

/// `<output>.manifest.json`
pub fn manifest_path(output: &Path) -> PathBuf {
    sibling(output, "manifest.json")
}

/// `<output>.report.md`
pub fn report_path(output: &Path) -> PathBuf {
    sibling(output, "report.md")
}

fn sibling(output: &Path, suffix: &str) -> PathBuf {
    let mut name = output.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    output.with_file_name(name)
}
