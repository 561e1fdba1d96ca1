//! Persistence of the current schema between runs
//!
//! Loading a class file replaces the stored schema in place. There is only
//! ever one current schema; concurrent writers are last-wins.

use crate::{Result, Schema};
use std::path::{Path, PathBuf};

#[cfg(feature = "tokio")]
use tokio::fs;

/// JSON file holding the current schema
#[derive(Debug, Clone)]
pub struct SchemaStore {
    path: PathBuf,
}

impl SchemaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the schema, replacing any previous one
    #[cfg(feature = "tokio")]
    pub async fn save(&self, schema: &Schema) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(schema)?;
        fs::write(&self.path, json).await?;
        log::debug!("Saved schema for '{}' to {}", schema.entity_name, self.path.display());
        Ok(())
    }

    /// Load the stored schema, `None` when nothing has been saved yet
    #[cfg(feature = "tokio")]
    pub async fn load(&self) -> Result<Option<Schema>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Forget the stored schema. Returns whether there was one.
    #[cfg(feature = "tokio")]
    pub async fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the schema (sync version)
    pub fn save_sync(&self, schema: &Schema) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(schema)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the stored schema (sync version)
    pub fn load_sync(&self) -> Result<Option<Schema>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Forget the stored schema (sync version)
    pub fn clear_sync(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeedError;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_sync() {
        let temp_dir = TempDir::new().unwrap();
        let store = SchemaStore::new(temp_dir.path().join("state/schema.json"));

        assert!(store.load_sync().unwrap().is_none());

        let mut schema = Schema::new("Person");
        schema.push_field("Id", "Guid");
        schema.push_field("Tags", "string[]");
        store.save_sync(&schema).unwrap();

        assert_eq!(store.load_sync().unwrap(), Some(schema));
    }

    #[test]
    fn test_save_replaces_previous_schema() {
        let temp_dir = TempDir::new().unwrap();
        let store = SchemaStore::new(temp_dir.path().join("schema.json"));

        store.save_sync(&Schema::new("First")).unwrap();
        store.save_sync(&Schema::new("Second")).unwrap();

        assert_eq!(store.load_sync().unwrap().unwrap().entity_name, "Second");
    }

    #[test]
    fn test_clear_sync() {
        let temp_dir = TempDir::new().unwrap();
        let store = SchemaStore::new(temp_dir.path().join("schema.json"));

        assert!(!store.clear_sync().unwrap());
        store.save_sync(&Schema::new("Person")).unwrap();
        assert!(store.clear_sync().unwrap());
        assert!(store.load_sync().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SchemaStore::new(path).load_sync().unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn test_reads_browser_shaped_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{"entityName":"Person","properties":[{"type":"int","name":"Age"}]}"#,
        )
        .unwrap();

        let schema = SchemaStore::new(path).load_sync().unwrap().unwrap();
        assert_eq!(schema.entity_name, "Person");
        assert_eq!(schema.fields[0].name, "Age");
        assert_eq!(schema.fields[0].field_type, "int");
    }
}
