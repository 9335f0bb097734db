//! poslog Position Model
//!
//! Defines the data read out of a position log:
//! - **Position records:** `(x, y, z)` triples, one per matching log line
//! - **Position sequence:** records in file order, never reordered
//! - **Extractor:** turns `Vec3(x,y,z), rotation: ...` lines into records
//!
//! Adjacent records are compared by the delta reporter; nothing here
//! interprets units or coordinate frames.

pub mod extract;
pub mod position;

pub use extract::*;
pub use position::*;
