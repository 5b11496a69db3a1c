//! The catalog of data product definitions.
//!
//! Each entry pairs a slash-separated definition path (which becomes both the
//! OpenAPI route and the output file name) with its definition. Built-in
//! definitions live in the submodules, grouped by domain; further definitions
//! can be loaded from a directory of YAML files.

mod air_quality;
mod battery;
mod codes;
mod company;
mod guides;
mod health;
mod key;
mod logistics;
mod nsg;
mod passport;
mod product;

use std::path::Path;

use tokio::fs;
use walkdir::WalkDir;

use crate::definition::DataProductDefinition;
use crate::{Error, Result};

/// One definition and the path it is published under
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub path: String,
    pub definition: DataProductDefinition,
}

/// Ordered set of definitions keyed by path
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All definitions shipped with the crate
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let definitions = air_quality::definitions()
            .into_iter()
            .chain(battery::definitions())
            .chain(company::definitions())
            .chain(health::definitions())
            .chain(key::definitions())
            .chain(logistics::definitions())
            .chain(nsg::definitions())
            .chain(passport::definitions())
            .chain(product::definitions())
            .chain(guides::definitions());
        for (path, definition) in definitions {
            // Paths are unique literals, see test_builtin_paths_are_unique
            if let Err(e) = catalog.insert(path, definition) {
                log::error!("{e}");
            }
        }
        catalog
    }

    /// Built-in definitions plus those found in `dir`, if any
    pub async fn with_dir<P: AsRef<Path>>(dir: Option<P>) -> Result<Self> {
        let mut catalog = Self::builtin();
        if let Some(dir) = dir {
            catalog.extend(Self::load_dir(dir).await?)?;
        }
        Ok(catalog)
    }

    /// Load every `*.yaml` / `*.yml` definition below `dir`.
    ///
    /// The entry path is the file's path relative to `dir` without extension,
    /// so `Energy/Battery/Custom_v1.0.yaml` becomes `Energy/Battery/Custom_v1.0`.
    pub async fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let is_yaml = matches!(
                entry.path().extension().and_then(|e| e.to_str()),
                Some("yaml" | "yml")
            );
            if entry.file_type().is_file() && is_yaml {
                files.push(entry.into_path());
            }
        }

        let mut catalog = Self::new();
        for file in files {
            let relative = file.strip_prefix(dir).map_err(|e| {
                Error::config(format!("{} is outside {}: {e}", file.display(), dir.display()))
            })?;
            let path = relative
                .with_extension("")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");

            log::debug!("Loading definition {} from {}", path, file.display());
            let content = fs::read_to_string(&file).await?;
            let definition: DataProductDefinition =
                serde_yaml::from_str(&content).map_err(|e| {
                    Error::definition(format!("Invalid definition {}: {e}", file.display()))
                })?;
            catalog.insert(path, definition)?;
        }
        Ok(catalog)
    }

    /// Add a definition; paths must be unique
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        definition: DataProductDefinition,
    ) -> Result<()> {
        let path = path.into().trim_matches('/').to_string();
        if path.is_empty() {
            return Err(Error::definition("definition path must not be empty"));
        }
        if self.get(&path).is_some() {
            return Err(Error::definition(format!(
                "definition '{path}' is declared more than once"
            )));
        }
        self.entries.push(CatalogEntry { path, definition });
        Ok(())
    }

    /// Move all entries of `other` into this catalog
    pub fn extend(&mut self, other: Catalog) -> Result<()> {
        for entry in other.entries {
            self.insert(entry.path, entry.definition)?;
        }
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&DataProductDefinition> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| &e.definition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose path starts with `prefix` (whole segments only)
    pub fn filter_prefix(&self, prefix: &str) -> Self {
        let prefix = prefix.trim_matches('/');
        let entries = self
            .entries
            .iter()
            .filter(|e| {
                prefix.is_empty()
                    || e.path == prefix
                    || e.path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .cloned()
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Model};
    use tempfile::tempdir;

    fn tiny() -> DataProductDefinition {
        DataProductDefinition::new(Model::new("Req"), Model::new("Resp"))
    }

    #[test]
    fn test_builtin_paths_are_unique() {
        let declared = air_quality::definitions().len()
            + battery::definitions().len()
            + company::definitions().len()
            + guides::definitions().len()
            + health::definitions().len()
            + key::definitions().len()
            + logistics::definitions().len()
            + nsg::definitions().len()
            + passport::definitions().len()
            + product::definitions().len();
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), declared);
        assert!(catalog.get("AirQuality/Current_v1.0").is_some());
    }

    #[test]
    fn test_insert_rejects_duplicates_and_empty_paths() {
        let mut catalog = Catalog::new();
        catalog.insert("/Health/Diagnoses_v1.0/", tiny()).unwrap();
        assert!(catalog.get("Health/Diagnoses_v1.0").is_some());
        assert!(matches!(
            catalog.insert("Health/Diagnoses_v1.0", tiny()),
            Err(Error::Definition(_))
        ));
        assert!(catalog.insert("/", tiny()).is_err());
    }

    #[test]
    fn test_filter_prefix_matches_whole_segments() {
        let mut catalog = Catalog::new();
        catalog.insert("draft/Company/BasicInfo", tiny()).unwrap();
        catalog.insert("draft/CompanyX/BasicInfo", tiny()).unwrap();
        catalog.insert("Health/Diagnoses_v1.0", tiny()).unwrap();

        let filtered = catalog.filter_prefix("draft/Company");
        assert_eq!(filtered.len(), 1);
        assert_eq!(catalog.filter_prefix("").len(), 3);
        assert_eq!(catalog.filter_prefix("Health/Diagnoses_v1.0").len(), 1);
    }

    #[tokio::test]
    async fn test_load_dir_reads_nested_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("Weather");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(
            nested.join("Current_v0.1.yaml"),
            r#"
version: 0.1.0
title: Current weather
request:
  name: CurrentWeatherRequest
  fields:
    - name: lat
      type: { kind: number }
      example: 60.1
      constraints: { ge: -90, le: 90 }
response:
  name: CurrentWeatherResponse
  fields:
    - name: temperature_celsius
      type: { kind: number }
      example: -3.5
"#,
        )?;
        std::fs::write(dir.path().join("notes.txt"), "ignored")?;

        let catalog = Catalog::load_dir(dir.path()).await?;
        assert_eq!(catalog.len(), 1);
        let def = catalog.get("Weather/Current_v0.1").expect("loaded");
        assert_eq!(def.title.as_deref(), Some("Current weather"));
        assert_eq!(
            def.response.fields[0],
            Field::number("temperature_celsius").example(-3.5)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_with_dir_rejects_shadowing_builtin() -> crate::Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("AirQuality");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(
            nested.join("Current_v1.0.yaml"),
            "request: { name: A }\nresponse: { name: B }\n",
        )?;

        let err = Catalog::with_dir(Some(dir.path())).await.unwrap_err();
        assert!(matches!(err, Error::Definition(_)));
        Ok(())
    }
}
