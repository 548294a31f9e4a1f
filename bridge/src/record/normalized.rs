use error_stack::Report;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::debug;
use tracing::warn;

use super::field::NormalizedField;
use crate::error::Error;
use crate::error::Result;

/// An arbitrary upstream record of unknown shape
pub type Record = Map<String, Value>;

/// Parse JSON text that must hold a single object
///
/// # Errors
///
/// Returns [`Error::Input`] when `text` is not valid JSON or is not an object.
pub fn parse_record(text: &str) -> Result<Record> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(Report::new(Error::invalid(
            "record",
            format!("expected a JSON object, found {}", json_type_name(&other)),
        ))),
        Err(e) => Err(Report::new(Error::invalid("JSON input", e))),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A record holding exactly the nine [`NormalizedField`] columns, in declared order
///
/// Serializes as a plain JSON object. Deserializing re-applies the mapping, so
/// any JSON object can be read back into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedRecord(Map<String, Value>);

impl NormalizedRecord {
    /// Map a source record onto the fixed columns
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let fields = NormalizedField::iter()
            .map(|field| (field.name().to_string(), field.resolve(record)))
            .collect();
        Self(fields)
    }

    /// Map any JSON value; anything other than an object carries no fields
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if let Value::Object(record) = value {
            Self::from_record(record)
        } else {
            warn!("Input is not a JSON object, every field falls back to its default");
            Self::from_record(&Map::new())
        }
    }

    /// Parse JSON text and map it
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] when `text` is not valid JSON. The mapping itself cannot fail.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Report::new(Error::invalid("JSON input", e)))?;
        let normalized = Self::from_value(&value);
        debug!(
            "Mapped record with {} source keys",
            value.as_object().map_or(0, Map::len)
        );
        Ok(normalized)
    }

    /// Value of one column
    #[must_use]
    pub fn get(&self, field: NormalizedField) -> &Value {
        // Every column is inserted at construction
        self.0.get(field.name()).unwrap_or(&Value::Null)
    }

    /// Borrow the underlying object
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON object value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Pretty-printed JSON with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0)
            .map_err(|e| Report::new(Error::failed_to_write("normalized record", e)))
    }
}

impl From<&Record> for NormalizedRecord {
    fn from(record: &Record) -> Self {
        Self::from_record(record)
    }
}

impl<'de> Deserialize<'de> for NormalizedRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
