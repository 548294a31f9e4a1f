use tracing::warn;

use super::diff::SchemaDiff;
use super::diff::SchemaPatch;
use super::diff::TypeMismatch;
use super::property::PropertyDefinition;
use super::remote::RemoteSchema;

/// Options offered by the `Type` select column
pub const RECORD_TYPE_OPTIONS: [&str; 3] =
    ["Educational Transcript", "Meeting Notes", "AI Transcription"];

/// Columns the target database must contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSchema {
    properties: Vec<PropertyDefinition>,
}

impl RequiredSchema {
    /// Build from an explicit list of columns
    #[must_use]
    pub const fn new(properties: Vec<PropertyDefinition>) -> Self {
        Self { properties }
    }

    /// The fixed column set expected by the note pipeline
    ///
    /// The title column is not listed; every database already has exactly one.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            PropertyDefinition::select("Type", RECORD_TYPE_OPTIONS),
            PropertyDefinition::rich_text("Duration"),
            PropertyDefinition::number("Duration_Seconds"),
            PropertyDefinition::rich_text("AI_Cost"),
            PropertyDefinition::rich_text("Icon"),
            PropertyDefinition::rich_text("Summary"),
            PropertyDefinition::rich_text("Main_Points"),
            PropertyDefinition::rich_text("Action_Items"),
            PropertyDefinition::rich_text("References"),
            PropertyDefinition::rich_text("Follow-up_Questions"),
            PropertyDefinition::rich_text("Stories"),
            PropertyDefinition::rich_text("Arguments"),
            PropertyDefinition::rich_text("Sentiment"),
        ])
    }

    /// Required columns in declared order
    #[must_use]
    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    /// Required minus existing
    ///
    /// Existing columns are never removed or retyped; a type disagreement is only
    /// reported as a [`TypeMismatch`].
    #[must_use]
    pub fn diff(&self, remote: &RemoteSchema) -> SchemaDiff {
        let mut patch = SchemaPatch::default();
        let mut mismatches = Vec::new();

        for property in &self.properties {
            match remote.kind_of(property.name()) {
                None if remote.contains(property.name()) => {
                    // Present without a readable type: leave it alone
                    warn!(
                        "Property '{}' exists but its type could not be read",
                        property.name()
                    );
                },
                None => patch.add(property),
                Some(actual) if &actual != property.kind() => {
                    mismatches.push(TypeMismatch {
                        name: property.name().to_string(),
                        expected: property.kind().clone(),
                        actual,
                    });
                },
                Some(_) => {}
            }
        }

        SchemaDiff { patch, mismatches }
    }
}

impl Default for RequiredSchema {
    fn default() -> Self {
        Self::standard()
    }
}
