//! Writing the catalog out as OpenAPI documents.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::openapi::{to_openapi, verify, ConversionOptions};
use crate::validate::validate_definition;

// External imports (alphabetized)
use tokio::fs;

/// Location of the document for the definition at `path`.
///
/// The extension is appended rather than substituted so versioned names
/// like `Current_v1.0` keep their suffix.
pub fn document_path(output_dir: &Path, path: &str) -> PathBuf {
    output_dir.join(format!("{}.json", path.trim_matches('/')))
}

/// Convert every catalog entry to `<output_dir>/<path>.json`.
///
/// Definitions are validated first unless `config.validate` is off; the
/// first definition with violations aborts the run. Every document is built
/// and verified before the first file is written, so a failing definition
/// leaves the output directory untouched. Returns the written files in
/// catalog order.
pub async fn convert_definitions(catalog: &Catalog, config: &Config) -> Result<Vec<PathBuf>> {
    if config.validate {
        for entry in catalog {
            let violations = validate_definition(&entry.definition);
            if !violations.is_empty() {
                let details = violations
                    .iter()
                    .map(|v| format!("  {}", v))
                    .collect::<Vec<_>>()
                    .join("\n");
                return Err(Error::definition(format!(
                    "{} has {} violation(s):\n{}",
                    entry.path,
                    violations.len(),
                    details
                )));
            }
        }
    }

    let options = ConversionOptions {
        server_url: config.server_url.clone(),
    };
    let output_dir = Path::new(&config.output_dir);

    let mut documents = Vec::with_capacity(catalog.len());
    for entry in catalog {
        log::debug!("Converting {}", entry.path);
        let doc = to_openapi(&entry.path, &entry.definition, &options)?;
        verify(&doc)?;
        documents.push((document_path(output_dir, &entry.path), doc));
    }

    let mut written = Vec::with_capacity(documents.len());
    for (target, doc) in documents {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut content = serde_json::to_string_pretty(&doc)?;
        content.push('\n');
        fs::write(&target, content).await?;
        log::info!("{} written", target.display());
        written.push(target);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DataProductDefinition;
    use crate::schema::{Field, Model};
    use serde_json::Value as JsonValue;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                "Weather/Current_v1.0",
                DataProductDefinition::new(
                    Model::new("CurrentWeatherRequest")
                        .field(Field::number("lat").example(60.1).ge(-90.0).le(90.0)),
                    Model::new("CurrentWeatherResponse")
                        .field(Field::number("temperature").example(-3.5)),
                )
                .title("Current weather"),
            )
            .unwrap();
        catalog
            .insert(
                "draft/Person/Details",
                DataProductDefinition::new(
                    Model::new("PersonDetailsRequest"),
                    Model::new("PersonDetailsResponse").field(Field::string("name")),
                ),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_document_path_keeps_version_suffix() {
        assert_eq!(
            document_path(Path::new("out"), "/AirQuality/Current_v1.0"),
            Path::new("out/AirQuality/Current_v1.0.json")
        );
    }

    #[tokio::test]
    async fn test_writes_one_document_per_entry() -> Result<()> {
        let dir = tempdir()?;
        let config = Config::new(dir.path().to_string_lossy());

        let written = convert_definitions(&catalog(), &config).await?;
        assert_eq!(
            written,
            vec![
                dir.path().join("Weather/Current_v1.0.json"),
                dir.path().join("draft/Person/Details.json"),
            ]
        );

        let content = std::fs::read_to_string(&written[0])?;
        assert!(content.ends_with("}\n"));
        let doc: JsonValue = serde_json::from_str(&content)?;
        assert_eq!(doc["info"]["title"], "Current weather");
        assert!(doc["paths"]["/Weather/Current_v1.0"]["post"].is_object());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_definition_stops_conversion() -> Result<()> {
        let dir = tempdir()?;
        let mut catalog = catalog();
        catalog.insert(
            "Broken",
            DataProductDefinition::new(
                Model::new("BrokenRequest").field(Field::integer("count").example("many")),
                Model::new("BrokenResponse"),
            ),
        )?;

        let config = Config::new(dir.path().to_string_lossy());
        let err = convert_definitions(&catalog, &config).await.unwrap_err();
        assert!(matches!(err, Error::Definition(ref msg) if msg.contains("Broken")));
        assert!(!dir.path().join("Weather").exists());

        let mut config = config;
        config.validate = false;
        let written = convert_definitions(&catalog, &config).await?;
        assert_eq!(written.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_unconvertible_definition_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let mut catalog = catalog();
        catalog.insert(
            "Clash",
            DataProductDefinition::new(
                Model::new("ClashRequest"),
                Model::new("ClashResponse").field(Field::object(
                    "detail",
                    Model::new("NotFound").field(Field::string("why")),
                )),
            ),
        )?;

        let mut config = Config::new(dir.path().to_string_lossy());
        config.validate = false;
        let err = convert_definitions(&catalog, &config).await.unwrap_err();
        assert!(matches!(err, Error::OpenApi(ref msg) if msg.contains("Clash")));
        assert!(!dir.path().join("Weather/Current_v1.0.json").exists());
        assert!(!dir.path().join("draft").exists());

        config.validate = true;
        let err = convert_definitions(&catalog, &config).await.unwrap_err();
        assert!(matches!(err, Error::Definition(ref msg) if msg.contains("components")));
        Ok(())
    }
}
