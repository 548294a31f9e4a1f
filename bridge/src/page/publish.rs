use tracing::info;

use super::properties::PageProperties;
use crate::error::Result;
use crate::json_object::IntoStrings;
use crate::json_object::JsonObjectAccess;
use crate::notion_client::NotionApi;
use crate::record::Record;
use crate::schema::RemoteSchema;
use crate::schema::RequiredSchema;
use crate::schema::SchemaSynchronizer;
use crate::schema::SyncReport;

/// How [`publish`] prepares the database before writing
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Run the additive schema synchronizer with this schema first
    pub ensure_schema: Option<RequiredSchema>,
}

/// Result of creating one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Identifier of the new page
    pub page_id: Option<String>,
    /// Browser URL of the new page
    pub url:     Option<String>,
    /// Columns written
    pub written: Vec<String>,
    /// Outcome of the schema sync, when one was requested
    pub sync:    Option<SyncReport>,
}

/// Create one database row from a record
///
/// # Errors
///
/// Returns [`crate::Error::Remote`] when any request fails or the database has no
/// title column.
pub async fn publish<A: NotionApi + ?Sized>(
    api: &A,
    database_id: &str,
    record: &Record,
    options: &PublishOptions,
) -> Result<PublishReport> {
    let sync = match &options.ensure_schema {
        Some(required) => Some(SchemaSynchronizer::new(api, database_id, required).run().await?),
        None => None,
    };

    let database = api.retrieve_database(database_id).await?;
    let remote = RemoteSchema::from_database(&database)?;
    let properties = PageProperties::build(record, &remote)?;

    let response = api
        .create_page(&properties.to_create_body(database_id))
        .await?;

    let report = PublishReport {
        page_id: response.get_field_str("id").map(str::to_string),
        url: response.get_field_str("url").map(str::to_string),
        written: properties.names().into_strings(),
        sync,
    };
    info!(
        "Created page {} with {} properties",
        report.page_id.as_deref().unwrap_or("<unknown id>"),
        report.written.len()
    );
    Ok(report)
}
