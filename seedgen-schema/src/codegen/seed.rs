//! Seed-data listing generator
//!
//! Produces a `public static List<Entity> SeedData` property with one object
//! initializer per CSV data row. `Id` is required on every row and always
//! comes first, `IsActive` is always `true`, and the remaining schema fields
//! follow in declaration order.

use crate::codegen::templates::SEED_DATA_TEMPLATE;
use crate::codegen::{serialize_kind, serialize_value, CodeGenerator, GeneratedCode, TemplateGenerator};
use crate::{CsvTable, FieldKind, Result, RowValues, Schema, SeedError, IDENTITY_FIELD, STATUS_FIELD};
use serde::Serialize;

const SEED_TEMPLATE_NAME: &str = "seed_data";

#[derive(Debug, Serialize)]
struct SeedContext<'a> {
    entity_name: &'a str,
    rows: Vec<SeedRow>,
}

#[derive(Debug, Serialize)]
struct SeedRow {
    assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize)]
struct Assignment {
    name: String,
    value: String,
}

impl Assignment {
    fn new(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Seed-data code generator
pub struct SeedDataGenerator {
    template_generator: TemplateGenerator,
    entity_override: Option<String>,
}

impl SeedDataGenerator {
    /// Create a new seed-data generator
    pub fn new() -> Result<Self> {
        let mut template_generator = TemplateGenerator::new();
        template_generator.register_template(SEED_TEMPLATE_NAME, SEED_DATA_TEMPLATE)?;

        Ok(Self {
            template_generator,
            entity_override: None,
        })
    }

    /// Emit the listing for `name` instead of the schema's entity name.
    /// A blank name keeps the schema's.
    pub fn with_entity_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.entity_override = (!name.trim().is_empty()).then(|| name.trim().to_string());
        self
    }

    /// Generate the listing text
    pub fn generate(&self, schema: &Schema, csv: &CsvTable) -> Result<String> {
        CodeGenerator::generate(self, schema, csv).map(|generated| generated.code)
    }

    fn build_row(&self, schema: &Schema, values: &RowValues, row: usize) -> Result<SeedRow> {
        let id = values.get(IDENTITY_FIELD).trim();
        if id.is_empty() {
            return Err(SeedError::MissingIdentity { row });
        }

        let mut assignments = vec![
            Assignment::new(IDENTITY_FIELD, serialize_kind(id, FieldKind::Guid)),
            Assignment::new(STATUS_FIELD, "true".to_string()),
        ];

        assignments.extend(
            schema
                .fields
                .iter()
                .filter(|field| field.name != IDENTITY_FIELD && field.name != STATUS_FIELD)
                .map(|field| {
                    let raw = values.get(&field.name);
                    Assignment::new(&field.name, serialize_value(raw, &field.field_type))
                }),
        );

        Ok(SeedRow { assignments })
    }
}

impl CodeGenerator for SeedDataGenerator {
    fn generate(&self, schema: &Schema, csv: &CsvTable) -> Result<GeneratedCode> {
        if schema.is_empty() {
            return Err(SeedError::EmptySchema);
        }
        if csv.len() < 2 {
            return Err(SeedError::InsufficientCsv { rows: csv.len() });
        }

        let entity_name = self
            .entity_override
            .as_deref()
            .unwrap_or_else(|| schema.resolved_entity_name());

        let header = csv.header().unwrap_or(&[]);
        let rows = csv
            .data_rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let values = RowValues::from_row(header, row);
                self.build_row(schema, &values, i + 1)
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Rendering {} row(s) for entity '{}'",
            rows.len(),
            entity_name
        );

        let row_count = rows.len();
        let context = SeedContext { entity_name, rows };
        let code = self.template_generator.render(SEED_TEMPLATE_NAME, &context)?;

        Ok(GeneratedCode {
            entity_name: entity_name.to_string(),
            rows: row_count,
            code,
        })
    }
}
