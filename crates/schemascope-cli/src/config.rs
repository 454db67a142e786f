//! Configuration file handling

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for schemascope
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// DDL file paths or patterns
    #[serde(default)]
    pub schema: Vec<String>,

    /// Directory containing DDL files
    pub schema_dir: Option<String>,

    /// Output format (human, json)
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Config = toml::from_str(&contents).into_diagnostic()?;
        Ok(config)
    }

    /// Try to find and load schemascope.toml in the current directory or
    /// parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join("schemascope.toml");
            if config_path.exists() {
                return Ok(Some(Self::from_file(&config_path)?));
            }

            // Try parent directory
            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Merge CLI arguments into configuration.
    /// CLI arguments take precedence over config file values.
    pub fn merge_with_args(
        mut self,
        files: &[PathBuf],
        schema_dir: &Option<PathBuf>,
        format: &Option<crate::args::OutputFormat>,
    ) -> Self {
        if !files.is_empty() {
            self.schema = files.iter().map(|p| p.display().to_string()).collect();
        }

        if schema_dir.is_some() {
            self.schema_dir = schema_dir.as_ref().map(|p| p.display().to_string());
        }

        if let Some(fmt) = format {
            self.format = Some(format!("{:?}", fmt).to_lowercase());
        }

        self
    }
}
