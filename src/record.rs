//! Line codec for the batch exchange format.
//!
//! Input records are `id|behavior|x|y|z`, result records are `id|x|y|z`.
//! Numbers are parsed and printed with Rust's own routines, which never
//! consult the process locale, so `.` is always the decimal separator.

use thiserror::Error;

use crate::math::Vector3;

pub const FIELD_SEPARATOR: char = '|';
/// Fractional digits used for coordinates in exchanged records.
pub const COORDINATE_PRECISION: usize = 6;

const RECORD_FIELDS: usize = 5;
const RESULT_FIELDS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub id: u32,
    pub behavior: String,
    pub position: Vector3,
}

/// One entity's position after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub id: u32,
    pub position: Vector3,
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("unable to parse entity id from '{0}'")]
    EntityId(String),
    #[error("unable to parse float from '{0}'")]
    Float(String),
}

impl EntityRecord {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields = split_fields(line, RECORD_FIELDS)?;
        Ok(Self {
            id: parse_u32(fields[0])?,
            behavior: fields[1].to_string(),
            position: parse_position(fields[2], fields[3], fields[4])?,
        })
    }

    pub fn to_line(&self) -> String {
        let p = self.position;
        format!(
            "{}|{}|{:.prec$}|{:.prec$}|{:.prec$}",
            self.id,
            self.behavior,
            p.x,
            p.y,
            p.z,
            prec = COORDINATE_PRECISION
        )
    }
}

impl StepResult {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields = split_fields(line, RESULT_FIELDS)?;
        Ok(Self {
            id: parse_u32(fields[0])?,
            position: parse_position(fields[1], fields[2], fields[3])?,
        })
    }

    pub fn to_line(&self) -> String {
        let p = self.position;
        format!(
            "{}|{:.prec$}|{:.prec$}|{:.prec$}",
            self.id,
            p.x,
            p.y,
            p.z,
            prec = COORDINATE_PRECISION
        )
    }
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_position(x: &str, y: &str, z: &str) -> Result<Vector3, RecordError> {
    Ok(Vector3::new(parse_f32(x)?, parse_f32(y)?, parse_f32(z)?))
}

/// Parses an entity id. A negative zero such as `-0` reads as 0.
fn parse_u32(value: &str) -> Result<u32, RecordError> {
    let trimmed = value.trim();
    if let Some(digits) = trimmed.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| RecordError::EntityId(value.to_string()))
}

/// Parses a float field. Leading and trailing whitespace is ignored. The
/// only spelled-out values are `Infinity` and `NaN` (any case, optionally
/// signed); abbreviations like `inf` are rejected.
pub fn parse_f32(value: &str) -> Result<f32, RecordError> {
    let trimmed = value.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        let magnitude = if body.eq_ignore_ascii_case("infinity") {
            f32::INFINITY
        } else if body.eq_ignore_ascii_case("nan") {
            f32::NAN
        } else {
            return Err(RecordError::Float(value.to_string()));
        };
        return Ok(if negative { -magnitude } else { magnitude });
    }

    trimmed
        .parse::<f32>()
        .map_err(|_| RecordError::Float(value.to_string()))
}
