//! Access to the persisted schema shared by all commands

use anyhow::{Context, Result};
use seedgen_schema::{Schema, SchemaStore, SeedError};

/// Load the current schema, failing when no class file has been loaded yet
pub async fn require_schema(store: &SchemaStore) -> Result<Schema> {
    let schema = store
        .load()
        .await
        .with_context(|| format!("Failed to read schema state {}", store.path().display()))?;

    match schema {
        Some(schema) => Ok(schema),
        None => Err(SeedError::MissingFile(
            "no entity loaded; run `seedgen load <CLASS_FILE>` first".to_string(),
        )
        .into()),
    }
}

/// Load the current schema and make sure it has fields
pub async fn require_fields(store: &SchemaStore) -> Result<Schema> {
    let schema = require_schema(store).await?;
    if schema.is_empty() {
        return Err(SeedError::EmptySchema.into());
    }
    Ok(schema)
}

pub async fn clear(store: &SchemaStore) -> Result<()> {
    if store.clear().await? {
        println!("🧹 Forgot the loaded entity ({})", store.path().display());
    } else {
        println!("ℹ️  No entity was loaded");
    }
    Ok(())
}
