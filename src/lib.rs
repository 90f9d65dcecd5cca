/// Remote catalog access and resource lookup helpers.
pub mod catalog;
/// Local JSON document load/store helpers.
pub mod document;
/// Record values, filtering, merging, and normalization.
pub mod records;

/// Logging verbosity for client operations.
#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Emit verbose debug output.
    Debug,
    /// Emit standard informational output.
    Information,
}

impl Default for LogLevel {
    /// Defaults to `Information` logging.
    fn default() -> Self {
        LogLevel::Information
    }
}
