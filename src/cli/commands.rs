use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::codegen::generator::{GenerateError, GeneratorOptions, generate_header};
use crate::plugin::session::PluginSession;
use crate::report::console::format_console_summary;
use crate::report::manifest::to_manifest_json;
use crate::report::report_model::GenerationReport;
use crate::scene::loader::{SceneError, load_selection};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("session I/O failed: {0}")]
    Session(std::io::Error),
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Generate the header for the scene at `input` and return the run report.
///
/// The header goes to `output` or, when absent, to `stdout`.
pub fn cmd_generate<W: Write>(
    input: &str,
    output: Option<&str>,
    manifest: Option<&str>,
    options: &GeneratorOptions,
    verbose: u8,
    stdout: &mut W,
) -> Result<GenerationReport, CliError> {
    let selection = load_selection(Path::new(input))?;
    let header = generate_header(&selection, options)?;
    let text = header.text;

    match output {
        Some(path) => write_file(path, &text)?,
        None => stdout.write_all(text.as_bytes()).map_err(|source| CliError::Write {
            path: "<stdout>".to_string(),
            source,
        })?,
    }

    let report = GenerationReport::new(
        selection.page.as_deref(),
        &options.prefix,
        &options.guard,
        header.records,
        &text,
    );

    if let Some(path) = manifest {
        write_file(path, &to_manifest_json(&report)?)?;
    }

    info!(
        input,
        records = report.records.len(),
        digest = %report.digest,
        "header written"
    );
    if verbose > 0 {
        for line in format_console_summary(&report).lines() {
            info!("{}", line);
        }
    }

    Ok(report)
}

// ============================================================================
// serve subcommand
// ============================================================================

/// Run the request loop for the scene at `input`. Returns requests handled.
pub fn cmd_serve<R: std::io::BufRead, W: Write>(
    input: &str,
    options: &GeneratorOptions,
    reader: R,
    writer: W,
) -> Result<usize, CliError> {
    let selection = load_selection(Path::new(input))?;
    let mut session = PluginSession::new(selection, options.clone());
    session.serve(reader, writer).map_err(CliError::Session)
}

// ============================================================================
// Helpers
// ============================================================================

fn write_file(path: &str, content: &str) -> Result<(), CliError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: path.to_string(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_string(),
        source,
    })
}
