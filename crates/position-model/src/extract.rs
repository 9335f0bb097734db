//! Line extractor: pulls `Vec3(x,y,z), rotation: ...` records out of a log.
//!
//! A matching line carries the literal shape
//!
//! ```text
//! Vec3(<x>,<y>,<z>), rotation:<anything>
//! ```
//!
//! Text before `Vec3(` is ignored so timestamped log prefixes still match.
//! Anything with the `Vec3(..,..,..), rotation:` outline counts as a record,
//! even when the fields themselves are garbage.
//! Each field is trimmed and parsed with Rust's `f64` literal grammar
//! (sign, digits, optional fraction and exponent, `inf`, `NaN`).

use std::fmt;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::position::{PositionRecord, PositionSequence};

// Greedy fields: `Vec3(1,2,3,4)` matches and then fails in the float parser.
const VEC3_PATTERN: &str = r"Vec3\((.*),(.*),(.*)\), rotation:";

/// What to do with a line that does not contain a position record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Abort on the first non-matching line, blank lines included.
    #[default]
    FailFast,
    /// Drop non-matching lines and keep going.
    SkipUnmatched,
}

impl MatchPolicy {
    pub fn from_skip_unmatched(skip: bool) -> Self {
        if skip {
            Self::SkipUnmatched
        } else {
            Self::FailFast
        }
    }
}

/// Vector component a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A captured field that is not a floating-point literal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {axis} value {value:?}: {source}")]
pub struct FieldError {
    pub axis: Axis,
    pub value: String,
    pub source: ParseFloatError,
}

/// Errors that can occur while extracting positions.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error on line {line_number}: {source}")]
    InvalidNumber {
        line_number: usize,
        source: FieldError,
    },

    #[error("Parse error on line {line_number}: no Vec3 position record in {line:?}")]
    UnmatchedLine { line_number: usize, line: String },
}

fn vec3_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VEC3_PATTERN).expect("Vec3 pattern is a valid regex"))
}

fn parse_field(axis: Axis, raw: &str) -> Result<f64, FieldError> {
    let value = raw.trim();
    value.parse::<f64>().map_err(|source| FieldError {
        axis,
        value: value.to_string(),
        source,
    })
}

/// Parse a single log line.
///
/// Returns `Ok(None)` when the line has no `Vec3(..), rotation:` record,
/// and an error when it has one but a field is not a number.
pub fn parse_line(line: &str) -> Result<Option<PositionRecord>, FieldError> {
    let Some(caps) = vec3_regex().captures(line) else {
        return Ok(None);
    };

    let x = parse_field(Axis::X, &caps[1])?;
    let y = parse_field(Axis::Y, &caps[2])?;
    let z = parse_field(Axis::Z, &caps[3])?;
    Ok(Some(PositionRecord::new(x, y, z)))
}

/// Extract every position record from log text, in line order.
pub fn extract_positions(
    text: &str,
    policy: MatchPolicy,
) -> Result<PositionSequence, ExtractError> {
    let mut positions = PositionSequence::new();
    let mut skipped = 0usize;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let parsed = parse_line(line).map_err(|source| ExtractError::InvalidNumber {
            line_number,
            source,
        })?;

        match (parsed, policy) {
            (Some(record), _) => positions.push(record),
            (None, MatchPolicy::FailFast) => {
                return Err(ExtractError::UnmatchedLine {
                    line_number,
                    line: line.to_string(),
                });
            }
            (None, MatchPolicy::SkipUnmatched) => {
                tracing::debug!(line_number, "skipping line without position record");
                skipped += 1;
            }
        }
    }

    tracing::debug!(
        records = positions.len(),
        skipped,
        "extracted position records"
    );
    Ok(positions)
}

/// Read a log file completely, then extract its position records.
pub fn read_positions(
    path: impl AsRef<Path>,
    policy: MatchPolicy,
) -> Result<PositionSequence, ExtractError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ExtractError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read position log");

    extract_positions(&content, policy)
}
