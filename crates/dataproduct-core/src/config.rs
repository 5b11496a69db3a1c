//! Configuration management for definition conversion.
//!
//! This module defines the `Config` struct used by the conversion and HTML
//! bootstrap steps. The configuration can be loaded from a YAML or TOML file,
//! created programmatically, or assembled from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use dataproduct_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> dataproduct_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("DataProducts");
//! config.validate = false;
//!
//! // Or load from a config file
//! let config = Config::from_file("dataproduct.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

/// Configuration for definition conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory the OpenAPI documents are written into
    pub output_dir: String,

    /// Optional directory of YAML definition files added to the built-in catalog
    #[serde(default)]
    pub definitions_dir: Option<String>,

    /// Optional custom HTML page template
    #[serde(default)]
    pub template_path: Option<String>,

    /// Server URL advertised in the generated documents (Optional)
    #[serde(default)]
    pub server_url: Option<Url>,

    /// Whether to validate definitions before converting them
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            definitions_dir: None,
            template_path: None,
            server_url: None,
            validate: default_validate(),
        }
    }

    /// Load configuration from a file. `.toml` files are parsed as TOML,
    /// anything else as YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::Error::config(format!("Failed to encode TOML: {e}")))?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}

fn default_validate() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let mut config = Config::new("DataProducts");
        config.server_url = Some(Url::parse("https://gateway.example.com").unwrap());
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert!(loaded.validate);
        assert_eq!(loaded.definitions_dir, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_roundtrip_toml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.toml");

        let mut config = Config::new("out");
        config.definitions_dir = Some("definitions".into());
        config.validate = false;
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_defaults_when_fields_missing() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("minimal.yaml");
        fs::write(&file_path, "output_dir: DataProducts\n").await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, Config::new("DataProducts"));

        Ok(())
    }
}
