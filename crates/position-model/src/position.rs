//! Position records and the ordered sequence they are collected into.

use serde::{Deserialize, Serialize};

/// One `(x, y, z)` triple parsed from a matching log line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Component-wise difference between two records (`next - previous`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDelta {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl PositionRecord {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Difference from this record to `next`.
    pub fn delta_to(&self, next: &PositionRecord) -> PositionDelta {
        PositionDelta {
            dx: next.x - self.x,
            dy: next.y - self.y,
            dz: next.z - self.z,
        }
    }
}

/// Records in the order they appeared in the log.
///
/// Append-only: the only mutation is [`PositionSequence::push`], so
/// index order always equals file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionSequence {
    records: Vec<PositionRecord>,
}

impl PositionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PositionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[PositionRecord] {
        &self.records
    }

    /// Adjacent `[previous, next]` pairs; empty when fewer than two records.
    pub fn windows(&self) -> std::slice::Windows<'_, PositionRecord> {
        self.records.windows(2)
    }
}

impl FromIterator<PositionRecord> for PositionSequence {
    fn from_iter<I: IntoIterator<Item = PositionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PositionSequence {
    type Item = PositionRecord;
    type IntoIter = std::vec::IntoIter<PositionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a PositionSequence {
    type Item = &'a PositionRecord;
    type IntoIter = std::slice::Iter<'a, PositionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
