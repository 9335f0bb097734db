//! poslog Delta Report
//!
//! Compares each position record with the one after it:
//! - **Deltas:** component-wise differences between adjacent records
//! - **Summary:** count and z extent, for diagnostics only
//! - **Report:** one `z length is <dz>` line per adjacent pair
//!
//! No I/O of its own. The report writes to any `std::io::Write`.

pub mod delta;
pub mod report;

pub use delta::{compute_deltas, DeltaSummary};
pub use report::{format_z_length, write_report};
