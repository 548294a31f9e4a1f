use thiserror::Error;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_INVALID_PREFIX: &str = "Invalid";
const MSG_MISSING_PREFIX: &str = "Missing";

/// Result type for the `notion_bridge` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Error categories surfaced by the library
///
/// Every category is terminal for a command-line invocation; the binaries
/// print the report and exit with status 1.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable credential / database identifier
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unreadable input or input that is not valid JSON
    #[error("Input error: {0}")]
    Input(String),

    /// Output destination could not be written
    #[error("Output error: {0}")]
    Output(String),

    /// Non-2xx response, transport failure, or unparsable response body
    #[error("Notion API error: {0}")]
    Remote(String),
}

impl Error {
    /// Create a "Failed to X" input error
    #[must_use]
    pub fn failed_to_read(what: &str, details: impl std::fmt::Display) -> Self {
        Self::Input(format!("{MSG_FAILED_TO_PREFIX} read {what}: {details}"))
    }

    /// Create a "Failed to X" output error
    #[must_use]
    pub fn failed_to_write(what: &str, details: impl std::fmt::Display) -> Self {
        Self::Output(format!("{MSG_FAILED_TO_PREFIX} write {what}: {details}"))
    }

    /// Create an "Invalid X" input error
    #[must_use]
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::Input(format!("{MSG_INVALID_PREFIX} {what}: {details}"))
    }

    /// Create a "Missing X" configuration error
    #[must_use]
    pub fn missing(what: &str) -> Self {
        Self::Configuration(format!("{MSG_MISSING_PREFIX} {what}"))
    }

    /// Create error for a failed Notion API operation
    #[must_use]
    pub fn remote_failed(operation: &str, details: impl std::fmt::Display) -> Self {
        Self::Remote(format!("{MSG_FAILED_TO_PREFIX} {operation}: {details}"))
    }

    /// Create error for a non-2xx Notion API response
    #[must_use]
    pub fn remote_status(operation: &str, status: reqwest::StatusCode) -> Self {
        Self::Remote(format!(
            "{MSG_FAILED_TO_PREFIX} {operation}: API request failed with status {}",
            status.as_u16()
        ))
    }
}
