//! Snapshot Module
//!
//! Whole-state persistence: the scalar and list tables are written to one
//! JSON document and read back wholesale. There is no incremental log.
//!
//! ## Document Format
//! ```text
//! {
//!   "scalars": { "<key>": { "val": 4, "kind": "D" }, ... },
//!   "lists":   { "<key>": [1, "a", 2], ... }
//! }
//! ```
//! Scalars carry their kind tag; list elements are bare JSON integers or
//! strings. Element order within each list is exact. There is no version
//! field.
//!
//! ## Atomicity
//! A save writes a temporary file in the target's directory, syncs it, and
//! renames it over the target. A reader sees either the previous snapshot or
//! the new one, never a partial file.

mod document;
mod file;

use std::path::Path;

use crate::error::Result;
use crate::memtable::Tables;

pub use document::{Element, ScalarRecord, SnapshotDocument};
pub use file::{read_file, write_atomic};

/// Serialize `tables` and atomically replace the file at `path`
pub fn save(tables: &Tables, path: &Path) -> Result<()> {
    let document = SnapshotDocument::capture(tables);
    let bytes = document.to_json()?;
    write_atomic(path, &bytes)
}

/// Read and decode the snapshot at `path`.
///
/// Fails with `NotFound` if the file does not exist.
pub fn load(path: &Path) -> Result<Tables> {
    let bytes = read_file(path)?;
    SnapshotDocument::from_json(&bytes)?.into_tables()
}
