use super::state::require_fields;
use anyhow::{Context, Result};
use seedgen_schema::{build_sample, SchemaStore};
use std::path::Path;
use tokio::fs;

pub async fn run(store: &SchemaStore, output: &Path) -> Result<()> {
    let schema = require_fields(store).await?;
    let csv = build_sample(&schema)?;

    fs::write(output, &csv)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Wrote sample CSV for '{}'", schema.entity_name);
    println!("✅ Sample CSV written to {}", output.display());
    Ok(())
}
