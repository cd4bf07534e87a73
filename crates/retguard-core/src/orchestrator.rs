//! Runs the check over front-end input and shapes the result for output.

use std::path::Path;

use retguard_check::NilReturnAnalyzer;
use retguard_diagnostics::{AnalysisSummary, Diagnostic, Severity};
use retguard_syntax::ast::AnalysisInput;
use retguard_syntax::printer::RenderError;
use retguard_syntax::InputError;
use tracing::info;

use crate::config::Config;

/// Complete result of one run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisOutput {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: AnalysisSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Load front-end JSON from `path` and analyze it.
pub fn analyze_file(path: &Path, config: &Config) -> Result<AnalysisOutput, OrchestratorError> {
    let input = retguard_syntax::load_json_file(path)?;
    info!(
        input = %path.display(),
        files = input.files.len(),
        go_version = %input.go_version,
        "loaded front-end output"
    );
    analyze_input(&input, config)
}

/// Analyze already-loaded input.
///
/// Diagnostics come back sorted by location, filtered by the configured
/// severity threshold, and capped at `max_diagnostics`. The summary is
/// built from the filtered set so exit-code decisions match what the
/// user sees.
pub fn analyze_input(
    input: &AnalysisInput,
    config: &Config,
) -> Result<AnalysisOutput, OrchestratorError> {
    let mut diagnostics = if config.rules.nilret.enabled {
        NilReturnAnalyzer::analyze(input)?
    } else {
        Vec::new()
    };

    diagnostics.sort_by(|a, b| {
        (
            a.location.file.as_str(),
            a.location.line,
            a.location.column,
            a.rule.as_str(),
        )
            .cmp(&(
                b.location.file.as_str(),
                b.location.line,
                b.location.column,
                b.rule.as_str(),
            ))
    });

    let threshold = parse_severity(&config.retguard.severity_threshold);
    diagnostics.retain(|d| d.severity.is_at_least(threshold));
    diagnostics.truncate(config.retguard.max_diagnostics);

    let summary = AnalysisSummary::from_diagnostics(&diagnostics, input.files.len());
    Ok(AnalysisOutput {
        diagnostics,
        summary,
    })
}

/// Parse a severity name, falling back to `Warning` for unknown values.
pub fn parse_severity(s: &str) -> Severity {
    match s {
        "info" => Severity::Info,
        "warning" => Severity::Warning,
        "error" => Severity::Error,
        "critical" => Severity::Critical,
        _ => Severity::Warning,
    }
}
