//! HTTP transport for the Notion API
//!
//! Encapsulates URL building, authentication headers, request sending,
//! status checking and response parsing. Requests are sent once: there is no
//! retry and no explicit timeout.

use error_stack::Report;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

use super::constants::JSON_CONTENT_TYPE;
use super::constants::MAX_ERROR_BODY_CHARS;
use super::constants::NOTION_API_PREFIX;
use super::constants::NOTION_API_VERSION;
use super::constants::NOTION_VERSION_HEADER;
use super::types::NotionErrorPayload;
use super::types::NotionOperation;
use crate::error::Error;
use crate::error::Result;

/// Authenticated HTTP client bound to one API host
pub struct NotionHttpClient {
    client:   reqwest::Client,
    base_url: String,
    api_key:  String,
}

impl NotionHttpClient {
    /// Create a client for `base_url` (scheme and host, no trailing path)
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build the full URL for an API route such as `/databases/{id}`
    #[must_use]
    pub fn build_url(&self, route: &str) -> String {
        format!("{}{NOTION_API_PREFIX}{route}", self.base_url)
    }

    /// Send one request and return the parsed 2xx response body
    pub async fn send_request(
        &self,
        operation: NotionOperation,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.build_url(route);

        let mut request = self
            .client
            .request(operation.method(), &url)
            .bearer_auth(&self.api_key)
            .header(NOTION_VERSION_HEADER, NOTION_API_VERSION)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            debug!("Notion {operation}: request body - {body}");
            request = request.json(body);
        }

        debug!("Notion {operation}: {} {url}", operation.method());
        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(Self::handle_error(operation, &e, &url)),
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            Report::new(Error::remote_failed(
                operation.description(),
                "could not read response body",
            ))
            .attach(format!("Full error: {e:?}"))
        })?;

        Self::parse_response(operation, status, &text)
    }

    /// Turn a status and body into the parsed value or a report carrying the error payload
    fn parse_response(operation: NotionOperation, status: StatusCode, text: &str) -> Result<Value> {
        let parsed = serde_json::from_str::<Value>(text);

        if !status.is_success() {
            warn!("Notion {operation}: HTTP status error - status={status}");
            let mut report = Report::new(Error::remote_status(operation.description(), status))
                .attach(format!(
                    "Notion returned HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown error")
                ));
            report = match parsed
                .ok()
                .and_then(|value| serde_json::from_value::<NotionErrorPayload>(value).ok())
            {
                Some(payload) if payload.is_error() => {
                    report.attach(format!("Error response: {payload}"))
                },
                _ => report.attach(format!(
                    "Response body (first {MAX_ERROR_BODY_CHARS} chars): {}",
                    text.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>()
                )),
            };
            return Err(report);
        }

        parsed.map_err(|e| {
            warn!("Notion {operation}: JSON parsing failed - error={e}");
            Report::new(Error::remote_failed(
                operation.description(),
                format!("failed to parse response: {e}"),
            ))
            .attach(format!(
                "Response body (first {MAX_ERROR_BODY_CHARS} chars): {}",
                text.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>()
            ))
        })
    }

    /// Describe a transport failure
    fn handle_error(operation: NotionOperation, e: &reqwest::Error, url: &str) -> Report<Error> {
        warn!("Notion {operation}: HTTP request failed - error={e}");

        let error_type = if e.is_timeout() {
            "Timeout"
        } else if e.is_connect() {
            "Connection failed"
        } else if e.is_request() {
            "Request error"
        } else if e.is_body() {
            "Body error"
        } else if e.is_decode() {
            "Decode error"
        } else {
            "Unknown error type"
        };

        Report::new(Error::remote_failed(
            operation.description(),
            format!("HTTP request failed - {error_type}: {e}"),
        ))
        .attach(format!("Method: {}, URL: {url}", operation.method()))
        .attach(format!("Full error: {e:?}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = NotionHttpClient::new(reqwest::Client::new(), "http://localhost:9/", "key");
        assert_eq!(
            client.build_url("/databases/abc"),
            "http://localhost:9/v1/databases/abc"
        );
    }

    #[test]
    fn test_success_body_is_returned() {
        let value = NotionHttpClient::parse_response(
            NotionOperation::RetrieveDatabase,
            StatusCode::OK,
            r#"{"object":"database","properties":{}}"#,
        )
        .unwrap();
        assert_eq!(value, json!({"object": "database", "properties": {}}));
    }

    #[test]
    fn test_error_status_carries_payload() {
        let report = NotionHttpClient::parse_response(
            NotionOperation::UpdateDatabase,
            StatusCode::BAD_REQUEST,
            r#"{"object":"error","status":400,"code":"validation_error","message":"bad property"}"#,
        )
        .unwrap_err();
        assert!(matches!(report.current_context(), Error::Remote(_)));
        let rendered = format!("{report:?}");
        assert!(rendered.contains("validation_error"));
        assert!(rendered.contains("bad property"));
    }

    #[test]
    fn test_unparsable_success_body_is_remote_error() {
        let report = NotionHttpClient::parse_response(
            NotionOperation::CreatePage,
            StatusCode::OK,
            "<html>gateway</html>",
        )
        .unwrap_err();
        assert!(report.to_string().contains("failed to parse response"));
    }
}
