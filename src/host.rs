//! Host side of the batch exchange: building the input document from live
//! entities and folding the result document back into them.

use std::collections::HashMap;

use crate::{
    math::Vector3,
    record::{EntityRecord, StepResult, COORDINATE_PRECISION},
};

/// Encodes a batch input document: the time-step header followed by one
/// line per record.
pub fn encode_batch(time_step: f32, records: &[EntityRecord]) -> String {
    let mut text = format!("{time_step:.prec$}\n", prec = COORDINATE_PRECISION);
    for record in records {
        text.push_str(&record.to_line());
        text.push('\n');
    }
    text
}

/// Decodes a result document. Lines that are blank or do not parse are
/// skipped.
pub fn decode_results(text: &str) -> Vec<StepResult> {
    text.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| StepResult::parse(line).ok())
        .collect()
}

/// Writes each result's position to the entity it names. Ids with no
/// matching entity are ignored. Returns how many entities were updated.
pub fn apply_results(positions: &mut HashMap<u32, Vector3>, results: &[StepResult]) -> usize {
    let mut updated = 0;
    for result in results {
        if let Some(position) = positions.get_mut(&result.id) {
            *position = result.position;
            updated += 1;
        }
    }
    updated
}
