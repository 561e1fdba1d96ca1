//! Schema type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Property name as declared in the class
    pub name: String,

    /// Declared type, verbatim (`string[]`, `List<int>`, `Guid`, ...)
    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    /// Classified kind of the declared type
    pub fn kind(&self) -> FieldKind {
        FieldKind::classify(&self.field_type)
    }
}

/// Type families that receive specialized literal handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `string`
    String,
    /// `int`, `int32`
    Int,
    /// `bool`, `boolean`
    Bool,
    /// `guid`
    Guid,
    /// `string[]`, pipe-delimited in CSV
    StringArray,
    /// Anything else, emitted as an opaque string literal
    Other,
}

impl FieldKind {
    /// Classify a declared type, ignoring case and surrounding whitespace
    pub fn classify(declared_type: &str) -> Self {
        match declared_type.trim().to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "int" | "int32" => Self::Int,
            "bool" | "boolean" => Self::Bool,
            "guid" => Self::Guid,
            "string[]" => Self::StringArray,
            _ => Self::Other,
        }
    }

    /// Placeholder written into the sample CSV row
    pub fn sample_value(self) -> &'static str {
        match self {
            Self::String => "Sample Text",
            Self::Int => "1",
            Self::Bool => "true",
            Self::Guid => "",
            Self::StringArray => "Red|Blue",
            Self::Other => "",
        }
    }

    /// What a CSV cell for this kind should look like
    pub fn format_hint(self) -> &'static str {
        match self {
            Self::String => "Any text (e.g. \"John Doe\")",
            Self::Int => "Integer (e.g. 1, 100)",
            Self::Bool => "true / false",
            Self::Guid => "Enter a valid Guid string",
            Self::StringArray => "Pipe-separated values (e.g. Red|Blue|Green)",
            Self::Other => "Custom type",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Guid => "guid",
            Self::StringArray => "string[]",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
