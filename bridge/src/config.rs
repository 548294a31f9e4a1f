//! Connection settings sourced from the process environment
//!
//! A `.env` file in the working directory is loaded first when present; values
//! already set in the environment take precedence over it.

use std::fmt;

use error_stack::Report;
use tracing::debug;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;
use crate::notion_client::DEFAULT_NOTION_BASE_URL;

/// Environment variable holding the integration token
pub const API_KEY_VAR: &str = "NOTION_API_KEY";

/// Environment variable holding the target database identifier
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Optional override of the API host
pub const BASE_URL_VAR: &str = "NOTION_API_BASE_URL";

/// Credential, target database and API host
#[derive(Clone, PartialEq, Eq)]
pub struct NotionConfig {
    api_key:     String,
    database_id: String,
    base_url:    String,
}

impl NotionConfig {
    /// Build from explicit values against the production host
    #[must_use]
    pub fn new(api_key: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            api_key:     api_key.into(),
            database_id: database_id.into(),
            base_url:    DEFAULT_NOTION_BASE_URL.to_string(),
        }
    }

    /// Point at a different API host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load `.env` if present, then read the process environment
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming every required variable that is unset or empty.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded settings from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => warn!("Ignoring unreadable .env file: {e}"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup function
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming every required variable that is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = read(API_KEY_VAR);
        let database_id = read(DATABASE_ID_VAR);

        match (api_key, database_id) {
            (Some(api_key), Some(database_id)) => {
                let mut config = Self::new(api_key, database_id);
                if let Some(base_url) = read(BASE_URL_VAR) {
                    config = config.with_base_url(base_url);
                }
                Ok(config)
            },
            (api_key, database_id) => {
                let missing: Vec<&str> = [
                    (API_KEY_VAR, api_key.is_none()),
                    (DATABASE_ID_VAR, database_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(Report::new(Error::missing(&missing.join(", "))).attach(format!(
                    "Define {API_KEY_VAR} and {DATABASE_ID_VAR} in the environment or a .env file"
                )))
            },
        }
    }

    /// Integration token
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Target database identifier
    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// API scheme and host
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_reads_required_settings() {
        let config = NotionConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "secret_abc"),
            (DATABASE_ID_VAR, "db123"),
        ]))
        .unwrap();
        assert_eq!(config.api_key(), "secret_abc");
        assert_eq!(config.database_id(), "db123");
        assert_eq!(config.base_url(), DEFAULT_NOTION_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = NotionConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (DATABASE_ID_VAR, "d"),
            (BASE_URL_VAR, "http://127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_settings_are_named() {
        let report = NotionConfig::from_lookup(lookup(&[(API_KEY_VAR, "k")])).unwrap_err();
        assert!(matches!(report.current_context(), Error::Configuration(_)));
        assert!(report.to_string().contains(DATABASE_ID_VAR));
        assert!(!report.to_string().contains(API_KEY_VAR));

        let report = NotionConfig::from_lookup(lookup(&[(API_KEY_VAR, ""), (DATABASE_ID_VAR, " ")]))
            .unwrap_err();
        assert!(report.to_string().contains(API_KEY_VAR));
        assert!(report.to_string().contains(DATABASE_ID_VAR));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = NotionConfig::new("secret_abc", "db");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret_abc"));
        assert!(rendered.contains("<redacted>"));
    }
}
