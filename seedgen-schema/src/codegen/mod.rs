//! Code generation module for SeedGen
//!
//! This module turns a schema plus parsed CSV rows into C# source:
//! - Typed literals for individual cells
//! - The `SeedData` list listing, rendered from a handlebars template

use crate::{CsvTable, Result, Schema, SeedError};
use handlebars::Handlebars;
use serde::Serialize;
use std::fmt;

pub mod literal;
pub mod seed;
pub mod templates;

pub use literal::{serialize_kind, serialize_value};
pub use seed::SeedDataGenerator;

/// Base trait for code generators
pub trait CodeGenerator {
    /// Generate code for a schema from its CSV rows
    fn generate(&self, schema: &Schema, csv: &CsvTable) -> Result<GeneratedCode>;
}

/// Generated listing plus what it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Entity the listing was generated for
    pub entity_name: String,
    /// Number of object literals in the listing
    pub rows: usize,
    /// Full source text
    pub code: String,
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Template-based code generator
pub struct TemplateGenerator {
    handlebars: Handlebars<'static>,
}

impl TemplateGenerator {
    /// Create a new template generator. Output is source code, so values are
    /// never HTML-escaped.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Register a template
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| SeedError::CodeGen(format!("Template registration failed: {}", e)))?;
        Ok(())
    }

    /// Render a template with context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        Ok(self.handlebars.render(template_name, context)?)
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
