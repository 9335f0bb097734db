//! Read a position log and print its z deltas.

use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use poslog_delta_report::write_report;
use poslog_position_model::{read_positions, MatchPolicy};

pub fn run(path: PathBuf, policy: MatchPolicy) -> anyhow::Result<()> {
    tracing::info!(path = %path.display(), ?policy, "analyzing position log");

    let positions = read_positions(&path, policy)
        .with_context(|| format!("Failed to extract positions from {}", path.display()))?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let lines = write_report(&positions, &mut out).context("Failed to write report")?;

    tracing::info!(records = positions.len(), lines, "report complete");
    Ok(())
}
