//! One-shot additive schema synchronization
//!
//! The run walks `Fetching → Diffing → Patching → Done`. Any failure ends the
//! run immediately and is returned to the caller; nothing is retried.

use itertools::Itertools;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::diff::SchemaDiff;
use super::diff::TypeMismatch;
use super::remote::RemoteSchema;
use super::required::RequiredSchema;
use crate::error::Result;
use crate::json_object::IntoStrings;
use crate::notion_client::NotionApi;

/// Summary of a completed synchronization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Name of the database's title column, when one exists
    pub title_property: Option<String>,
    /// Columns added by this run, in request order
    pub added:          Vec<String>,
    /// Existing columns whose type disagrees with the required one
    pub mismatches:     Vec<TypeMismatch>,
}

/// Progress of a synchronization run
#[derive(Debug)]
pub enum SyncState {
    /// Retrieving the remote schema
    Fetching,
    /// Comparing the remote schema with the required one
    Diffing {
        /// Schema as reported by the service
        remote: RemoteSchema,
    },
    /// Sending the additive patch, if any
    Patching {
        /// Title column discovered while diffing
        title_property: Option<String>,
        /// Columns to add and mismatches to report
        diff:           SchemaDiff,
    },
    /// Terminal state
    Done(SyncReport),
}

impl SyncState {
    const fn name(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Diffing { .. } => "diffing",
            Self::Patching { .. } => "patching",
            Self::Done(_) => "done",
        }
    }
}

/// Ensures a remote database contains every required column
pub struct SchemaSynchronizer<'a, A: NotionApi + ?Sized> {
    api:         &'a A,
    database_id: &'a str,
    required:    &'a RequiredSchema,
}

impl<'a, A: NotionApi + ?Sized> SchemaSynchronizer<'a, A> {
    /// Create a synchronizer for one database
    #[must_use]
    pub const fn new(api: &'a A, database_id: &'a str, required: &'a RequiredSchema) -> Self {
        Self {
            api,
            database_id,
            required,
        }
    }

    /// Run to completion
    ///
    /// Issues one retrieve request and, only when columns are missing, one update request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Remote`] when either request fails or the database
    /// response has no schema.
    pub async fn run(&self) -> Result<SyncReport> {
        let mut state = SyncState::Fetching;
        loop {
            debug!("Schema sync state: {}", state.name());
            state = match state {
                SyncState::Fetching => self.fetch().await?,
                SyncState::Diffing { remote } => self.diff(&remote),
                SyncState::Patching {
                    title_property,
                    diff,
                } => self.patch(title_property, diff).await?,
                SyncState::Done(report) => return Ok(report),
            };
        }
    }

    async fn fetch(&self) -> Result<SyncState> {
        let database = self.api.retrieve_database(self.database_id).await?;
        let remote = RemoteSchema::from_database(&database)?;
        info!(
            "Current database structure retrieved successfully ({} properties)",
            remote.len()
        );
        Ok(SyncState::Diffing { remote })
    }

    fn diff(&self, remote: &RemoteSchema) -> SyncState {
        let title_property = remote.title_property().map(str::to_string);
        match &title_property {
            Some(name) => info!("Found existing title property: \"{name}\""),
            None => warn!("No title property found in the database. This is unusual."),
        }

        let diff = self.required.diff(remote);
        for mismatch in &diff.mismatches {
            warn!(
                "Property '{}' exists but has type '{}' instead of '{}'; leaving it unchanged",
                mismatch.name, mismatch.actual, mismatch.expected
            );
        }

        SyncState::Patching {
            title_property,
            diff,
        }
    }

    async fn patch(&self, title_property: Option<String>, diff: SchemaDiff) -> Result<SyncState> {
        let SchemaDiff { patch, mismatches } = diff;

        if patch.is_empty() {
            info!("No properties need to be added to the database");
        } else {
            self.api.update_database(self.database_id, &patch).await?;
            info!("Database structure updated successfully");
            info!("Added properties: {}", patch.names().iter().join(", "));
        }

        Ok(SyncState::Done(SyncReport {
            title_property,
            added: patch.names().into_iter().into_strings(),
            mismatches,
        }))
    }
}
