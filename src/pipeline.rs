//! Single-step transform over a whole batch document.

use thiserror::Error;

use crate::{
    behavior::Behavior,
    record::{self, EntityRecord, StepResult},
};

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("invalid delta time in input header: {header}")]
    InvalidTimeStep { header: String },
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Result of stepping one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutput {
    /// `None` when the input had no lines at all.
    pub time_step: Option<f32>,
    pub results: Vec<StepResult>,
}

impl StepOutput {
    /// Renders the output document, one newline-terminated line per result.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for result in &self.results {
            text.push_str(&result.to_line());
            text.push('\n');
        }
        text
    }
}

/// Applies the record's behavior once.
pub fn step_record(record: &EntityRecord, dt: f32) -> StepResult {
    let behavior = Behavior::resolve(&record.behavior);
    StepResult {
        id: record.id,
        position: behavior.apply(record.position, dt),
    }
}

/// Steps every parsable record, in order. Blank and malformed lines are
/// skipped without leaving a gap.
pub fn step_records<'a, I>(dt: f32, lines: I) -> Vec<StepResult>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| EntityRecord::parse(line).ok())
        .map(|record| step_record(&record, dt))
        .collect()
}

/// Runs one step over a full input document: a time-step header followed
/// by entity records. Only a bad header fails the batch.
pub fn run_step(input: &str) -> Result<StepOutput, PipelineError> {
    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let mut lines = input.lines();
    let Some(header) = lines.next() else {
        return Ok(StepOutput::default());
    };

    let dt = record::parse_f32(header).map_err(|_| PipelineError::InvalidTimeStep {
        header: header.to_string(),
    })?;

    Ok(StepOutput {
        time_step: Some(dt),
        results: step_records(dt, lines),
    })
}
