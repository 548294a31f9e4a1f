use std::fmt;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// Column types reported by the Notion database schema
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// The database's native title column
    Title,
    /// Free text
    RichText,
    /// Numeric column
    Number,
    /// Single-choice column
    Select,
    /// Date column
    Date,
    /// Any other type the service reports
    Other(String),
}

impl PropertyKind {
    /// Wire name of the type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Number => "number",
            Self::Select => "select",
            Self::Date => "date",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for PropertyKind {
    fn from(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "rich_text" => Self::RichText,
            "number" => Self::Number,
            "select" => Self::Select,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named column together with the schema object sent when creating it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    name:   String,
    kind:   PropertyKind,
    config: Value,
}

impl PropertyDefinition {
    /// Column with type-specific options, e.g. `{"format": "number"}` for a number column
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind, options: Value) -> Self {
        let mut config = Map::new();
        config.insert(kind.as_str().to_string(), options);
        Self {
            name: name.into(),
            kind,
            config: Value::Object(config),
        }
    }

    /// Free-text column
    #[must_use]
    pub fn rich_text(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::RichText, json!({}))
    }

    /// Single-choice column with the given option names
    #[must_use]
    pub fn select<'a>(name: impl Into<String>, options: impl IntoIterator<Item = &'a str>) -> Self {
        let options: Vec<Value> = options
            .into_iter()
            .map(|option| json!({ "name": option }))
            .collect();
        Self::new(name, PropertyKind::Select, json!({ "options": options }))
    }

    /// Plain numeric column
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Number, json!({ "format": "number" }))
    }

    /// Column name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column type
    #[must_use]
    pub const fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    /// Schema object for the update request, e.g. `{"rich_text": {}}`
    #[must_use]
    pub const fn config(&self) -> &Value {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(PropertyKind::from("rich_text"), PropertyKind::RichText);
        assert_eq!(PropertyKind::from("formula").as_str(), "formula");
        assert_eq!(PropertyKind::Title.to_string(), "title");
    }

    #[test]
    fn test_definition_configs() {
        assert_eq!(
            PropertyDefinition::rich_text("Icon").config(),
            &json!({"rich_text": {}})
        );
        assert_eq!(
            PropertyDefinition::number("Duration_Seconds").config(),
            &json!({"number": {"format": "number"}})
        );
        assert_eq!(
            PropertyDefinition::select("Type", ["A", "B"]).config(),
            &json!({"select": {"options": [{"name": "A"}, {"name": "B"}]}})
        );
    }
}
