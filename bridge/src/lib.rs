//! # Notion Bridge
//!
//! Reshapes loosely structured JSON records into the fixed column layout of a
//! Notion database, and keeps that database's schema supplied with the columns
//! the records need.
//!
//! - [`NormalizedRecord`] maps any JSON object onto nine fixed columns.
//! - [`SchemaSynchronizer`] adds missing columns to a remote database. It never
//!   removes or retypes existing ones.
//! - [`publish`] creates a database row from a record.
//!
//! # Usage
//!
//! ```
//! use notion_bridge::NormalizedRecord;
//!
//! let record = NormalizedRecord::from_json_str(r#"{"Title":"Call","Type":"Meeting Notes"}"#)?;
//! assert_eq!(record.get(notion_bridge::NormalizedField::Title), "Call");
//! # Ok::<(), error_stack::Report<notion_bridge::Error>>(())
//! ```

mod config;
mod error;
mod io;
mod json_object;
mod log_tools;
mod notion_client;
mod page;
mod record;
mod schema;

pub use config::{API_KEY_VAR, BASE_URL_VAR, DATABASE_ID_VAR, NotionConfig};
pub use error::{Error, Result};
pub use io::{InputSource, OutputTarget};
pub use json_object::{IntoStrings, JsonObjectAccess, JsonValueExt};
pub use log_tools::{LOG_LEVEL_VAR, LazyFileWriter, TracingLevel};
pub use notion_client::{
    DEFAULT_NOTION_BASE_URL, NOTION_API_VERSION, NotionApi, NotionClient, NotionErrorPayload,
    NotionOperation,
};
pub use page::{MAX_RICH_TEXT_CHARS, PageProperties, PublishOptions, PublishReport, publish};
pub use record::{FieldDefault, NormalizedField, NormalizedRecord, Record, parse_record};
pub use schema::{
    PropertyDefinition, PropertyKind, RemoteSchema, RequiredSchema, SchemaDiff, SchemaPatch,
    SchemaSynchronizer, SyncReport, SyncState, TypeMismatch,
};
