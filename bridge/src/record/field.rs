use serde_json::Map;
use serde_json::Value;
use strum_macros::AsRefStr;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::IntoStaticStr;

use crate::json_object::JsonObjectAccess;

/// The nine columns of a normalized record, in output order
///
/// Using strum's `IntoStaticStr` derive allows `.into()` to get the column name,
/// which is identical to the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, IntoStaticStr)]
pub enum NormalizedField {
    /// Page title, preferring the generated `AI_Title`
    Title,
    /// Category of the record (e.g. "Meeting Notes")
    Type,
    /// Emoji or icon text
    Icon,
    /// Summary bullet points
    Summary,
    /// Cited references
    References,
    /// Stories told in the source material
    Stories,
    /// Arguments made in the source material
    Arguments,
    /// Sentiment observations
    Sentiment,
    /// Human-readable duration text
    Duration,
}

/// Empty value used when no source key supplies a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Empty string
    Text,
    /// Empty array
    List,
}

impl FieldDefault {
    /// The JSON value for this default
    #[must_use]
    pub const fn value(self) -> Value {
        match self {
            Self::Text => Value::String(String::new()),
            Self::List => Value::Array(Vec::new()),
        }
    }
}

impl NormalizedField {
    /// Column name in the normalized output
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Source keys consulted in precedence order
    #[must_use]
    pub const fn sources(self) -> &'static [&'static str] {
        match self {
            Self::Title => &["AI_Title", "Title"],
            Self::Type => &["Type"],
            Self::Icon => &["Icon"],
            Self::Summary => &["Summary"],
            Self::References => &["References"],
            Self::Stories => &["Stories"],
            Self::Arguments => &["Arguments"],
            Self::Sentiment => &["Sentiment"],
            Self::Duration => &["Duration"],
        }
    }

    /// Default applied when no source key is present
    #[must_use]
    pub const fn default_kind(self) -> FieldDefault {
        match self {
            Self::Title | Self::Type | Self::Icon | Self::Duration => FieldDefault::Text,
            Self::Summary
            | Self::References
            | Self::Stories
            | Self::Arguments
            | Self::Sentiment => FieldDefault::List,
        }
    }

    /// Resolve this field from a source record: first present source wins, else the default
    ///
    /// Values pass through untouched, whatever their JSON type.
    #[must_use]
    pub fn resolve(self, record: &Map<String, Value>) -> Value {
        self.sources()
            .iter()
            .find_map(|key| record.get_present(key))
            .cloned()
            .unwrap_or_else(|| self.default_kind().value())
    }
}
