use super::tips::print_tips;
use anyhow::{Context, Result};
use seedgen_schema::{SchemaExtractor, SchemaStore, SeedError};
use std::path::Path;

pub async fn run(store: &SchemaStore, class_file: &Path) -> Result<()> {
    log::info!("Loading entity from: {}", class_file.display());

    if !class_file.is_file() {
        return Err(SeedError::MissingFile(class_file.display().to_string()).into());
    }

    let schema = SchemaExtractor::extract_file(class_file)
        .await
        .with_context(|| format!("Failed to read {}", class_file.display()))?;

    store
        .save(&schema)
        .await
        .with_context(|| format!("Failed to save schema state {}", store.path().display()))?;

    println!(
        "✅ Loaded entity '{}' with {} field(s)",
        schema.entity_name,
        schema.len()
    );
    print_tips(&schema);
    Ok(())
}
