use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use super::property::PropertyDefinition;
use super::property::PropertyKind;

/// Existing column whose type disagrees with the required one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Column name
    pub name:     String,
    /// Type the required schema asks for
    pub expected: PropertyKind,
    /// Type the database reports
    pub actual:   PropertyKind,
}

/// Missing columns to add, in required-schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPatch {
    properties: Map<String, Value>,
}

impl SchemaPatch {
    /// Queue a column for creation
    pub fn add(&mut self, property: &PropertyDefinition) {
        self.properties
            .insert(property.name().to_string(), property.config().clone());
    }

    /// Whether nothing needs to be added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of columns to add
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Names of the columns to add
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    /// Body of the database update request
    #[must_use]
    pub fn to_request_body(&self) -> Value {
        json!({ "properties": self.properties })
    }
}

/// Outcome of comparing the required schema with the remote one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiff {
    /// Columns to add
    pub patch:      SchemaPatch,
    /// Columns left untouched despite a type disagreement
    pub mismatches: Vec<TypeMismatch>,
}
