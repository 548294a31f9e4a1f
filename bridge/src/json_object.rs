//! Extension traits over `serde_json` values
//!
//! Field lookup by any string-like key, the presence rule used when mapping
//! records, and collecting names into owned strings.

use serde_json::Map;
use serde_json::Value;

/// Field lookup on JSON objects by any string-like key
pub trait JsonObjectAccess {
    /// Value stored under `field`
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value>;

    /// Value stored under `field` when it is a string
    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str>;

    /// Get field value only when it is present in the mapping sense (see
    /// [`JsonValueExt::is_present`])
    fn get_present<T: AsRef<str>>(&self, field: T) -> Option<&Value> {
        self.get_field(field).filter(|value| value.is_present())
    }
}

impl JsonObjectAccess for Value {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Self> {
        self.get(field.as_ref())
    }

    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str> {
        self.get(field.as_ref()).and_then(Self::as_str)
    }
}

impl JsonObjectAccess for Map<String, Value> {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value> {
        self.get(field.as_ref())
    }

    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str> {
        self.get(field.as_ref()).and_then(Value::as_str)
    }
}

/// Extension trait for inspecting individual JSON values
pub trait JsonValueExt {
    /// Whether the value counts as supplied when picking the first non-empty source
    ///
    /// `null`, `false`, zero and the empty string are treated as absent. Arrays and
    /// objects always count as present, even when empty.
    fn is_present(&self) -> bool;

    /// Text form of the value: strings verbatim, everything else as compact JSON
    fn to_display_text(&self) -> String;
}

impl JsonValueExt for Value {
    fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }

    fn to_display_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Extension trait for converting iterators to `Vec<String>`
///
/// Replaces the common `.map(String::from).collect()` pattern with a more
/// expressive `.into_strings()` call.
pub trait IntoStrings<T> {
    /// Convert an iterator of items that can become strings into a `Vec<String>`
    fn into_strings(self) -> Vec<String>;
}

impl<I, T> IntoStrings<T> for I
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    fn into_strings(self) -> Vec<String> {
        self.map(Into::into).collect()
    }
}
