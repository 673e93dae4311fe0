//! File-level wrapper around the pipeline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::pipeline::{self, PipelineError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0}")]
    Usage(String),
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Usage(_) => 1,
            RunError::MissingInput(_) => 2,
            RunError::Pipeline(PipelineError::InvalidTimeStep { .. }) => 3,
            RunError::Io { .. } => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub time_step: Option<f32>,
    pub records_written: usize,
}

/// Reads `input`, steps it, and writes the result to `output`. Nothing is
/// written unless the header parses.
pub fn run_files(input: &Path, output: &Path) -> Result<RunSummary, RunError> {
    if !input.is_file() {
        return Err(RunError::MissingInput(input.to_path_buf()));
    }

    let bytes = fs::read(input).map_err(|source| RunError::Io {
        action: "read",
        path: input.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 only spoils the record it appears in.
    let text = String::from_utf8_lossy(&bytes);

    let step = pipeline::run_step(&text)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        time_step = ?step.time_step,
        "stepping entity batch"
    );

    fs::write(output, step.to_text()).map_err(|source| RunError::Io {
        action: "write",
        path: output.to_path_buf(),
        source,
    })?;

    debug!(records = step.results.len(), "wrote step results");
    Ok(RunSummary {
        time_step: step.time_step,
        records_written: step.results.len(),
    })
}
