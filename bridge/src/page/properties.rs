use error_stack::Report;
use itertools::Itertools;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::json_object::JsonObjectAccess;
use crate::json_object::JsonValueExt;
use crate::record::Record;
use crate::schema::PropertyKind;
use crate::schema::RemoteSchema;

/// Longest content the service accepts in one rich-text segment
pub const MAX_RICH_TEXT_CHARS: usize = 2000;

/// Record keys that may supply the title, in precedence order
const TITLE_SOURCES: [&str; 3] = ["AI_Title", "Title", "Summary"];

/// Property values for a new page, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageProperties {
    properties: Map<String, Value>,
}

impl PageProperties {
    /// Encode a record against the database's actual columns
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] when the database has no title column.
    pub fn build(record: &Record, remote: &RemoteSchema) -> Result<Self> {
        let title_property = remote.title_property().ok_or_else(|| {
            Report::new(Error::Remote(
                "database has no title property to write the record title into".to_string(),
            ))
        })?;

        let mut properties = Map::new();
        let title = TITLE_SOURCES
            .iter()
            .find_map(|key| record.get_present(key))
            .map(flatten_text)
            .unwrap_or_default();
        properties.insert(title_property.to_string(), title_value(&title));

        for (key, value) in record {
            if TITLE_SOURCES[..2].contains(&key.as_str()) || key == title_property {
                continue;
            }
            let Some(kind) = remote.kind_of(key) else {
                debug!("Skipping '{key}': no such property in the database");
                continue;
            };
            match encode(&kind, value) {
                Some(encoded) => {
                    properties.insert(key.clone(), encoded);
                },
                None => debug!("Skipping '{key}': properties of type '{kind}' are not written"),
            }
        }

        Ok(Self { properties })
    }

    /// Column names that will be written
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Encoded value of one column
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Body of the page creation request
    #[must_use]
    pub fn to_create_body(&self, database_id: &str) -> Value {
        json!({
            "parent": { "database_id": database_id },
            "properties": self.properties,
        })
    }
}

fn encode(kind: &PropertyKind, value: &Value) -> Option<Value> {
    match kind {
        PropertyKind::RichText => {
            Some(json!({ "rich_text": rich_text_segments(&flatten_text(value)) }))
        },
        PropertyKind::Select => {
            let name = flatten_text(value);
            Some(if name.is_empty() {
                json!({ "select": null })
            } else {
                json!({ "select": { "name": name } })
            })
        },
        PropertyKind::Number => Some(json!({ "number": to_number(value) })),
        PropertyKind::Date => {
            let start = flatten_text(value);
            Some(if start.is_empty() {
                json!({ "date": null })
            } else {
                json!({ "date": { "start": start } })
            })
        },
        PropertyKind::Title | PropertyKind::Other(_) => None,
    }
}

fn title_value(text: &str) -> Value {
    json!({ "title": rich_text_segments(text) })
}

/// Arrays become their items joined with `", "`; other values their display text
fn flatten_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(JsonValueExt::to_display_text).join(", "),
        other => other.to_display_text(),
    }
}

/// Split content into rich-text segments no longer than [`MAX_RICH_TEXT_CHARS`]
fn rich_text_segments(text: &str) -> Vec<Value> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    chars
        .chunks(MAX_RICH_TEXT_CHARS)
        .map(|chunk| json!({ "text": { "content": chunk.iter().collect::<String>() } }))
        .collect()
}

fn to_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or(Value::Null, Value::Number),
        _ => Value::Null,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    fn remote() -> RemoteSchema {
        RemoteSchema::from_database(&json!({
            "properties": {
                "Name": {"type": "title"},
                "Type": {"type": "select"},
                "Summary": {"type": "rich_text"},
                "Stories": {"type": "rich_text"},
                "Duration_Seconds": {"type": "number"},
                "Date": {"type": "date"},
                "Total": {"type": "formula"}
            }
        }))
        .unwrap()
    }

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_title_prefers_ai_title() {
        let props = PageProperties::build(
            &record(json!({"Title": "plain", "AI_Title": "generated"})),
            &remote(),
        )
        .unwrap();
        assert_eq!(
            props.get("Name"),
            Some(&json!({"title": [{"text": {"content": "generated"}}]}))
        );
        assert_eq!(props.get("Title"), None);
        assert_eq!(props.get("AI_Title"), None);
    }

    #[test]
    fn test_summary_fills_missing_title_and_its_own_column() {
        let props =
            PageProperties::build(&record(json!({"Summary": ["a", "b"]})), &remote()).unwrap();
        assert_eq!(
            props.get("Name"),
            Some(&json!({"title": [{"text": {"content": "a, b"}}]}))
        );
        assert_eq!(
            props.get("Summary"),
            Some(&json!({"rich_text": [{"text": {"content": "a, b"}}]}))
        );
    }

    #[test]
    fn test_values_are_encoded_by_column_kind() {
        let props = PageProperties::build(
            &record(json!({
                "Title": "t",
                "Type": "Meeting Notes",
                "Duration_Seconds": "90",
                "Date": "",
                "Stories": [1, "two"],
                "Total": 3,
                "Unknown": "x"
            })),
            &remote(),
        )
        .unwrap();

        assert_eq!(props.get("Type"), Some(&json!({"select": {"name": "Meeting Notes"}})));
        assert_eq!(props.get("Duration_Seconds"), Some(&json!({"number": 90.0})));
        assert_eq!(props.get("Date"), Some(&json!({"date": null})));
        assert_eq!(
            props.get("Stories"),
            Some(&json!({"rich_text": [{"text": {"content": "1, two"}}]}))
        );
        assert_eq!(props.get("Total"), None);
        assert_eq!(props.get("Unknown"), None);
    }

    #[test]
    fn test_unparsable_number_is_null() {
        let props = PageProperties::build(
            &record(json!({"Duration_Seconds": "about a minute"})),
            &remote(),
        )
        .unwrap();
        assert_eq!(props.get("Duration_Seconds"), Some(&json!({"number": null})));
    }

    #[test]
    fn test_long_text_is_split_into_segments() {
        let long = "x".repeat(MAX_RICH_TEXT_CHARS * 2 + 5);
        let props =
            PageProperties::build(&record(json!({"Stories": long})), &remote()).unwrap();
        let segments = props.get("Stories").unwrap()["rich_text"].as_array().unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[2]["text"]["content"].as_str().map(str::len),
            Some(5)
        );
    }

    #[test]
    fn test_missing_title_column_is_error() {
        let remote = RemoteSchema::from_database(&json!({"properties": {}})).unwrap();
        let report = PageProperties::build(&record(json!({"Title": "t"})), &remote).unwrap_err();
        assert!(matches!(report.current_context(), Error::Remote(_)));
    }

    #[test]
    fn test_create_body_names_parent() {
        let props = PageProperties::build(&record(json!({"Title": "t"})), &remote()).unwrap();
        let body = props.to_create_body("db42");
        assert_eq!(body["parent"], json!({"database_id": "db42"}));
        assert_eq!(
            props.names().collect::<Vec<_>>(),
            vec!["Name"]
        );
    }
}
