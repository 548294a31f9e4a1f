use error_stack::Report;
use serde_json::Map;
use serde_json::Value;

use super::property::PropertyKind;
use crate::error::Error;
use crate::error::Result;
use crate::json_object::JsonObjectAccess;

/// Column name to column descriptor, as owned by the remote database
///
/// Only ever read; changes go through an additive [`super::SchemaPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteSchema {
    properties: Map<String, Value>,
}

impl RemoteSchema {
    /// Wrap a `properties` object
    #[must_use]
    pub const fn new(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    /// Extract the schema from a retrieved database object
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] when the response has no `properties` object.
    pub fn from_database(database: &Value) -> Result<Self> {
        database
            .get_field("properties")
            .and_then(Value::as_object)
            .map(|properties| Self::new(properties.clone()))
            .ok_or_else(|| {
                Report::new(Error::Remote(
                    "database response has no properties object".to_string(),
                ))
                .attach(format!(
                    "Response object type: {}",
                    database.get_field_str("object").unwrap_or("unknown")
                ))
            })
    }

    /// Whether a column with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Type of an existing column, if it reports one
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<PropertyKind> {
        self.properties
            .get_field(name)
            .and_then(|property| property.get_field_str("type"))
            .map(PropertyKind::from)
    }

    /// First column typed as the native title field
    #[must_use]
    pub fn title_property(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|(_, property)| property.get_field_str("type") == Some("title"))
            .map(|(name, _)| name.as_str())
    }

    /// Existing column names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of existing columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the database reports no columns at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, name: &str, descriptor: Value) {
        self.properties.insert(name.to_string(), descriptor);
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_database_reads_properties() {
        let database = json!({
            "object": "database",
            "properties": {
                "Type": {"id": "a", "type": "select", "select": {"options": []}},
                "Name": {"id": "title", "type": "title", "title": {}}
            }
        });
        let schema = RemoteSchema::from_database(&database).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.kind_of("Type"), Some(PropertyKind::Select));
        assert_eq!(schema.title_property(), Some("Name"));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Type", "Name"]);
    }

    #[test]
    fn test_missing_properties_is_remote_error() {
        let report = RemoteSchema::from_database(&json!({"object": "list"})).unwrap_err();
        assert!(matches!(report.current_context(), Error::Remote(_)));
    }

    #[test]
    fn test_no_title_property() {
        let schema = RemoteSchema::from_database(&json!({
            "properties": {"Notes": {"type": "rich_text"}}
        }))
        .unwrap();
        assert_eq!(schema.title_property(), None);
        assert_eq!(schema.kind_of("Absent"), None);
    }
}
