use std::fmt;

use reqwest::Method;
use serde::Deserialize;

/// The API operations this crate performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotionOperation {
    /// `GET /v1/databases/{id}`
    RetrieveDatabase,
    /// `PATCH /v1/databases/{id}`
    UpdateDatabase,
    /// `POST /v1/pages`
    CreatePage,
}

impl NotionOperation {
    /// HTTP method of the operation
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::RetrieveDatabase => Method::GET,
            Self::UpdateDatabase => Method::PATCH,
            Self::CreatePage => Method::POST,
        }
    }

    /// Human-readable description used in logs and errors
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RetrieveDatabase => "retrieve database",
            Self::UpdateDatabase => "update database",
            Self::CreatePage => "create page",
        }
    }
}

impl fmt::Display for NotionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error body returned by the service alongside a non-2xx status
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotionErrorPayload {
    /// Always `"error"` for error bodies
    pub object:  String,
    /// HTTP status echoed by the service
    pub status:  Option<u16>,
    /// Machine-readable error code, e.g. `unauthorized`
    pub code:    Option<String>,
    /// Human-readable explanation
    pub message: Option<String>,
}

impl NotionErrorPayload {
    /// Whether a parsed body is an error object
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.object == "error"
    }
}

impl fmt::Display for NotionErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code: {}, message: {}",
            self.code.as_deref().unwrap_or("unknown"),
            self.message.as_deref().unwrap_or("no message")
        )?;
        if let Some(status) = self.status {
            write!(f, ", status: {status}")?;
        }
        Ok(())
    }
}
