use std::fs;
use std::path::Path;

use crate::records::value::Value;

/// Read a UTF-8 JSON document into a value tree.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value, String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid JSON document {}: {e}", path.display()))
}

/// Write a value tree as a pretty-printed UTF-8 JSON document.
///
/// Output uses a two-space indent and keeps non-ASCII characters literal.
pub fn write_document<P: AsRef<Path>>(path: P, document: &Value) -> Result<(), String> {
    let path = path.as_ref();
    let rendered = serde_json::to_string_pretty(document)
        .map_err(|e| format!("Failed to encode JSON document: {e}"))?;
    fs::write(path, rendered).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
