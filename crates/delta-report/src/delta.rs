//! Differences between adjacent position records.

use poslog_position_model::{PositionDelta, PositionSequence};

/// Deltas between each record and its successor, in sequence order.
///
/// A sequence of `N` records yields `N - 1` deltas; fewer than two
/// records yield none.
pub fn compute_deltas(positions: &PositionSequence) -> Vec<PositionDelta> {
    positions
        .windows()
        .map(|pair| pair[0].delta_to(&pair[1]))
        .collect()
}

/// Aggregate view over the z deltas of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaSummary {
    /// Number of deltas.
    pub count: usize,
    /// Sum of all z deltas (net z travel from first to last record).
    pub total_dz: f64,
    /// Smallest z delta.
    pub min_dz: f64,
    /// Largest z delta.
    pub max_dz: f64,
}

impl DeltaSummary {
    /// Summarize a delta list. Returns `None` when there are no deltas.
    pub fn from_deltas(deltas: &[PositionDelta]) -> Option<Self> {
        let first = deltas.first()?;
        let mut summary = Self {
            count: 0,
            total_dz: 0.0,
            min_dz: first.dz,
            max_dz: first.dz,
        };

        for delta in deltas {
            summary.count += 1;
            summary.total_dz += delta.dz;
            summary.min_dz = summary.min_dz.min(delta.dz);
            summary.max_dz = summary.max_dz.max(delta.dz);
        }

        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poslog_position_model::PositionRecord;
    use proptest::prelude::*;

    fn sequence_of_z(zs: &[f64]) -> PositionSequence {
        zs.iter().map(|&z| PositionRecord::new(1.0, 2.0, z)).collect()
    }

    #[test]
    fn test_deltas_for_sample_log() {
        let deltas = compute_deltas(&sequence_of_z(&[3.0, 5.5, 4.0]));
        let dzs: Vec<f64> = deltas.iter().map(|d| d.dz).collect();
        assert_eq!(dzs, vec![2.5, -1.5]);
        assert!(deltas.iter().all(|d| d.dx == 0.0 && d.dy == 0.0));
    }

    #[test]
    fn test_no_deltas_for_zero_or_one_record() {
        assert!(compute_deltas(&sequence_of_z(&[])).is_empty());
        assert!(compute_deltas(&sequence_of_z(&[7.0])).is_empty());
    }

    #[test]
    fn test_order_is_not_sorted() {
        let forward = compute_deltas(&sequence_of_z(&[1.0, 4.0, 2.0]));
        let permuted = compute_deltas(&sequence_of_z(&[2.0, 1.0, 4.0]));
        assert_eq!(forward[0].dz, 3.0);
        assert_eq!(forward[1].dz, -2.0);
        assert_eq!(permuted[0].dz, -1.0);
        assert_eq!(permuted[1].dz, 3.0);
    }

    #[test]
    fn test_summary() {
        let deltas = compute_deltas(&sequence_of_z(&[3.0, 5.5, 4.0, 4.0]));
        let summary = DeltaSummary::from_deltas(&deltas).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.total_dz - 1.0).abs() < 1e-12);
        assert_eq!(summary.min_dz, -1.5);
        assert_eq!(summary.max_dz, 2.5);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(DeltaSummary::from_deltas(&[]), None);
    }

    proptest! {
        #[test]
        fn prop_delta_count_is_len_minus_one(zs in prop::collection::vec(-1.0e6f64..1.0e6, 0..64)) {
            let deltas = compute_deltas(&sequence_of_z(&zs));
            prop_assert_eq!(deltas.len(), zs.len().saturating_sub(1));
        }

        #[test]
        fn prop_delta_values_follow_file_order(zs in prop::collection::vec(-1.0e6f64..1.0e6, 2..64)) {
            let deltas = compute_deltas(&sequence_of_z(&zs));
            for (i, delta) in deltas.iter().enumerate() {
                prop_assert_eq!(delta.dz, zs[i + 1] - zs[i]);
            }
        }
    }
}
