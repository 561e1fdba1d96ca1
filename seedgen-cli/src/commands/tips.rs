use super::state::require_schema;
use anyhow::Result;
use seedgen_schema::{Schema, SchemaStore};

pub async fn run(store: &SchemaStore) -> Result<()> {
    let schema = require_schema(store).await?;
    print_tips(&schema);
    Ok(())
}

/// Print per-field guidance on what each CSV column should contain
pub fn print_tips(schema: &Schema) {
    if schema.is_empty() {
        println!("⚠️  No auto-properties found in {}", schema.resolved_entity_name());
        return;
    }

    println!("\n💡 Field Format Suggestions:");
    for tip in schema.format_tips() {
        println!("   • {} ({}) - {}", tip.name, tip.field_type, tip.hint);
    }
}
