use async_trait::async_trait;
use error_stack::Report;
use serde_json::Value;
use tracing::debug;

use super::http_client::NotionHttpClient;
use super::types::NotionOperation;
use crate::config::NotionConfig;
use crate::error::Error;
use crate::error::Result;
use crate::schema::SchemaPatch;

/// Notion operations used by the synchronizer and the publisher
///
/// # Errors
///
/// Every method returns [`Error::Remote`] when the request cannot be sent, the
/// service answers with a non-2xx status, or the body is not JSON.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Fetch a database object, including its `properties` schema
    async fn retrieve_database(&self, database_id: &str) -> Result<Value>;

    /// Apply an additive schema update
    async fn update_database(&self, database_id: &str, patch: &SchemaPatch) -> Result<Value>;

    /// Create a page (database row) from a full request body
    async fn create_page(&self, body: &Value) -> Result<Value>;
}

/// [`NotionApi`] over HTTPS
pub struct NotionClient {
    http: NotionHttpClient,
}

impl NotionClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the HTTP client cannot be constructed.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                Report::new(Error::Configuration(format!(
                    "Failed to build HTTP client: {e}"
                )))
            })?;
        debug!("Notion client targeting {}", config.base_url());
        Ok(Self {
            http: NotionHttpClient::new(client, config.base_url(), config.api_key()),
        })
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn retrieve_database(&self, database_id: &str) -> Result<Value> {
        self.http
            .send_request(
                NotionOperation::RetrieveDatabase,
                &format!("/databases/{database_id}"),
                None,
            )
            .await
    }

    async fn update_database(&self, database_id: &str, patch: &SchemaPatch) -> Result<Value> {
        let body = patch.to_request_body();
        self.http
            .send_request(
                NotionOperation::UpdateDatabase,
                &format!("/databases/{database_id}"),
                Some(&body),
            )
            .await
    }

    async fn create_page(&self, body: &Value) -> Result<Value> {
        self.http
            .send_request(NotionOperation::CreatePage, "/pages", Some(body))
            .await
    }
}
