//! Sample CSV template built from a schema

use crate::{FieldKind, Result, Schema, SeedError, IDENTITY_FIELD};

/// File name offered for the downloaded template
pub const SAMPLE_FILE_NAME: &str = "sample_entity_data.csv";

/// Placeholder for a guid-typed identity column, which would otherwise be
/// empty. Other identity types keep their per-type placeholder.
pub const SAMPLE_IDENTITY: &str = "00000000-0000-0000-0000-000000000001";

/// Build a CSV template: a header line with every field name in schema order
/// and one line of per-type placeholder values.
pub fn build_sample(schema: &Schema) -> Result<String> {
    if schema.is_empty() {
        return Err(SeedError::EmptySchema);
    }

    let header = schema.field_names().join(",");
    let sample_row = schema
        .fields
        .iter()
        .map(|field| {
            if field.name == IDENTITY_FIELD && field.kind() == FieldKind::Guid {
                SAMPLE_IDENTITY
            } else {
                field.kind().sample_value()
            }
        })
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!("{}\n{}", header, sample_row))
}
