use super::state::require_fields;
use anyhow::{Context, Result};
use seedgen_schema::codegen::{CodeGenerator, SeedDataGenerator};
use seedgen_schema::{parse_csv, SchemaStore, SeedError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub async fn run(
    store: &SchemaStore,
    csv_file: &Path,
    entity_name: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let schema = require_fields(store).await?;

    if !csv_file.is_file() {
        return Err(SeedError::MissingFile(csv_file.display().to_string()).into());
    }

    let text = fs::read_to_string(csv_file)
        .await
        .with_context(|| format!("Failed to read {}", csv_file.display()))?;
    let table = parse_csv(&text);
    log::debug!("Parsed {} CSV row(s) from {}", table.len(), csv_file.display());

    let mut generator = SeedDataGenerator::new()?;
    if let Some(name) = entity_name {
        generator = generator.with_entity_name(name);
    }
    let generated = CodeGenerator::generate(&generator, &schema, &table)?;

    match output {
        Some(path) => {
            fs::write(&path, &generated.code)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✅ Generated {} {} row(s) into {}",
                generated.rows,
                generated.entity_name,
                path.display()
            );
        }
        None => println!("{}", generated),
    }

    Ok(())
}
