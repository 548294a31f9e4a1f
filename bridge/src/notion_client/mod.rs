//! Notion REST API access
//!
//! [`NotionApi`] is the seam the synchronizer and publisher are written against;
//! [`NotionClient`] implements it over HTTPS.

mod client;
mod constants;
mod http_client;
mod types;

pub use client::{NotionApi, NotionClient};
pub use constants::{DEFAULT_NOTION_BASE_URL, NOTION_API_VERSION};
pub use types::{NotionErrorPayload, NotionOperation};
