//! Text report of z deltas.

use std::io::Write;

use poslog_position_model::PositionSequence;

use crate::delta::{compute_deltas, DeltaSummary};

/// Render one report line for a z delta.
///
/// Uses the shortest decimal that round-trips the `f64` and always keeps a
/// fractional part for integral values (`2.0`, not `2`).
pub fn format_z_length(dz: f64) -> String {
    format!("z length is {dz:?}")
}

/// Write one line per adjacent pair of positions. Returns the number of lines.
///
/// Every delta is computed before the first line is written.
pub fn write_report<W: Write>(
    positions: &PositionSequence,
    out: &mut W,
) -> std::io::Result<usize> {
    let deltas = compute_deltas(positions);

    if let Some(summary) = DeltaSummary::from_deltas(&deltas) {
        tracing::debug!(
            count = summary.count,
            total_dz = summary.total_dz,
            min_dz = summary.min_dz,
            max_dz = summary.max_dz,
            "z delta summary"
        );
    }

    for delta in &deltas {
        writeln!(out, "{}", format_z_length(delta.dz))?;
    }
    out.flush()?;

    Ok(deltas.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use poslog_position_model::{extract_positions, MatchPolicy, PositionRecord};

    fn render(positions: &PositionSequence) -> String {
        let mut buf = Vec::new();
        write_report(positions, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_z_length() {
        assert_eq!(format_z_length(2.5), "z length is 2.5");
        assert_eq!(format_z_length(-1.5), "z length is -1.5");
        assert_eq!(format_z_length(2.0), "z length is 2.0");
        assert_eq!(format_z_length(0.3 - 0.1), "z length is 0.19999999999999998");
    }

    #[test]
    fn test_format_z_length_exponent_and_non_finite() {
        assert_eq!(format_z_length(1e-5), "z length is 1e-5");
        assert_eq!(format_z_length(1e16), "z length is 1e16");
        assert_eq!(format_z_length(1e15), "z length is 1000000000000000.0");
        assert_eq!(format_z_length(f64::NAN), "z length is NaN");
        assert_eq!(format_z_length(f64::NEG_INFINITY), "z length is -inf");
    }

    #[test]
    fn test_sample_log_report() {
        let text = "Vec3(1.0,2.0,3.0), rotation: 0\n\
                    Vec3(1.0,2.0,5.5), rotation: 0\n\
                    Vec3(1.0,2.0,4.0), rotation: 0\n";
        let positions = extract_positions(text, MatchPolicy::FailFast).unwrap();

        assert_eq!(render(&positions), "z length is 2.5\nz length is -1.5\n");
    }

    #[test]
    fn test_report_line_count() {
        let positions: PositionSequence = (0..5)
            .map(|i| PositionRecord::new(0.0, 0.0, i as f64 * 0.5))
            .collect();
        let mut buf = Vec::new();
        let lines = write_report(&positions, &mut buf).unwrap();

        assert_eq!(lines, 4);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_empty_and_single_produce_no_output() {
        assert_eq!(render(&PositionSequence::new()), "");

        let single: PositionSequence =
            std::iter::once(PositionRecord::new(1.0, 2.0, 3.0)).collect();
        assert_eq!(render(&single), "");
    }

    #[test]
    fn test_only_z_is_reported() {
        let positions: PositionSequence = vec![
            PositionRecord::new(0.0, 0.0, 1.0),
            PositionRecord::new(10.0, -3.0, 1.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(render(&positions), "z length is 0.0\n");
    }
}
