//! Catalog loading, reconciliation, and output emission.
//!
//! The canonical episode catalog is a single JSON file; manual edits arrive
//! as a parallel overlay file keyed by episode id. This crate merges the
//! overlay into the catalog ([`merge_descriptions`]), re-applies the
//! extended-description heuristic ([`restore_descriptions`]), and persists
//! the result as pretty JSON plus an embeddable data script.

pub mod io;
pub mod merge;
pub mod restore;

pub use io::{load_catalog, write_data_script, write_json};
pub use merge::{MergeReport, merge_descriptions};
pub use restore::{RestoreReport, restore_descriptions};
