//! CLI configuration loaded from `seedgen.toml`
//!
//! Every key is optional. A missing default config file is not an error, an
//! explicitly requested one is.

use anyhow::{Context, Result};
use seedgen_schema::SAMPLE_FILE_NAME;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "seedgen.toml";

/// Where the current schema is kept between runs
pub const DEFAULT_SCHEMA_FILE: &str = ".seedgen/schema.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub state: StateConfig,
    pub sample: SampleConfig,
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
    /// JSON file holding the loaded schema
    pub schema_file: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            schema_file: PathBuf::from(DEFAULT_SCHEMA_FILE),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// File the CSV template is written to
    pub file_name: PathBuf,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from(SAMPLE_FILE_NAME),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Write generated code here instead of stdout
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Load the config. `path` is the `--config` flag; without it the
    /// default file is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            log::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
