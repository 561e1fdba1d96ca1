//! SeedGen Schema - Entity schema extraction and seed-data code generation
//!
//! This crate turns a C# entity class and a CSV file into a static
//! `SeedData` listing, and builds CSV templates from an extracted schema.
//!
//! # Features
//!
//! - **Class scanning** for `public <Type> <Name> { get; set; }` auto-properties
//! - **CSV parsing** with quoted fields and doubled-quote escapes
//! - **Typed literal serialization** for strings, integers, booleans, guids and string arrays
//! - **Sample CSV templates** with per-type placeholder values
//! - **Template-based generation** of the seed-data listing
//! - **Schema persistence** as JSON between runs
//!
//! # Example
//!
//! ```rust
//! use seedgen_schema::{csv::parse_csv, SchemaExtractor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaExtractor::extract(
//!     "public class Person { public Guid Id { get; set; } public string Name { get; set; } }",
//! );
//!
//! #[cfg(feature = "codegen")]
//! {
//!     use seedgen_schema::codegen::SeedDataGenerator;
//!     let table = parse_csv("Id,Name\n11111111-1111-1111-1111-111111111111,Alice");
//!     let generator = SeedDataGenerator::new()?;
//!     let code = generator.generate(&schema, &table)?;
//!     println!("{}", code);
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod csv;
pub mod parser;
pub mod sample;
pub mod scanner;
pub mod store;
pub mod types;

#[cfg(feature = "codegen")]
pub mod codegen;

pub use csv::{parse_csv, CsvTable, RowValues};
pub use parser::SchemaExtractor;
pub use sample::{build_sample, SAMPLE_FILE_NAME};
pub use store::SchemaStore;
pub use types::*;

/// Entity name used when the class source declares none
pub const DEFAULT_ENTITY_NAME: &str = "YourEntity";

/// Conventional name of the identity field
pub const IDENTITY_FIELD: &str = "Id";

/// Conventional name of the status field
pub const STATUS_FIELD: &str = "IsActive";

/// SeedGen errors
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Missing file: {0}")]
    MissingFile(String),

    #[error("No fields found in the entity schema. Load a C# entity with auto-properties first.")]
    EmptySchema,

    #[error("CSV must contain headers and at least one data row (found {rows} row(s))")]
    InsufficientCsv { rows: usize },

    #[error("Missing Id in CSV data row {row}. Each row must include a valid Id.")]
    MissingIdentity { row: usize },

    #[error("Code generation error: {0}")]
    CodeGen(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "codegen")]
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Entity schema: the entity name plus its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Class name the listing is generated for
    #[serde(default)]
    pub entity_name: String,

    /// Fields in declaration order
    #[serde(rename = "properties", default)]
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create an empty schema for the given entity
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, keeping declaration order
    pub fn push_field(&mut self, name: impl Into<String>, field_type: impl Into<String>) {
        self.fields.push(Field::new(name, field_type));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get a field by name. Duplicate names resolve to the last declaration.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Entity name to emit, falling back to the default placeholder when blank
    pub fn resolved_entity_name(&self) -> &str {
        let name = self.entity_name.trim();
        if name.is_empty() {
            DEFAULT_ENTITY_NAME
        } else {
            name
        }
    }

    /// Field format suggestions in schema order
    pub fn format_tips(&self) -> Vec<FormatTip<'_>> {
        self.fields
            .iter()
            .map(|field| FormatTip {
                name: &field.name,
                field_type: &field.field_type,
                hint: field.kind().format_hint(),
            })
            .collect()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(DEFAULT_ENTITY_NAME)
    }
}

/// One line of format guidance for a CSV column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTip<'a> {
    pub name: &'a str,
    pub field_type: &'a str,
    pub hint: &'static str,
}
