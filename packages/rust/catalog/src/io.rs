//! Whole-file catalog reads and writes.
//!
//! Reads and writes are one-shot; any failure propagates to the caller and
//! aborts the run before partial output is produced.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use castpress_shared::{Catalog, CastpressError, Result};

/// Constant name the data script assigns the catalog to.
const DATA_SCRIPT_CONST: &str = "PODCAST_DATA";

/// Load a catalog from a JSON file (`{ "episodes": [...] }`).
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| CastpressError::io(path, e))?;
    let catalog: Catalog =
        serde_json::from_str(&content).map_err(|e| CastpressError::json(path, e))?;

    debug!(path = %path.display(), episodes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Write the catalog as 4-space-indented JSON.
pub fn write_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = to_pretty_json(catalog).map_err(|e| CastpressError::json(path, e))?;
    std::fs::write(path, json).map_err(|e| CastpressError::io(path, e))?;

    debug!(path = %path.display(), "catalog JSON written");
    Ok(())
}

/// Write the catalog as an embeddable script assigning the same structure
/// to `const PODCAST_DATA`.
pub fn write_data_script(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = to_pretty_json(catalog).map_err(|e| CastpressError::json(path, e))?;
    let script = format!("const {DATA_SCRIPT_CONST} = {json};\n");
    std::fs::write(path, script).map_err(|e| CastpressError::io(path, e))?;

    debug!(path = %path.display(), "data script written");
    Ok(())
}

/// serde_json's default pretty printer indents with 2 spaces; catalog
/// outputs use 4 to stay byte-compatible with the published files.
fn to_pretty_json(catalog: &Catalog) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
