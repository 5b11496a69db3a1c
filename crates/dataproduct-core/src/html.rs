//! HTML pages for the generated OpenAPI documents.
//!
//! Every `X.json` below the output root gets a sibling `X.html` that renders
//! the document in the browser. The page comes from a single tera template
//! whose only variable is `name`, the document's file stem.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// External imports (alphabetized)
use tera::{Context, Tera};
use tokio::fs;
use walkdir::WalkDir;

const TEMPLATE_NAME: &str = "definition.html";
const BUILTIN_TEMPLATE: &str = include_str!("../templates/definition.html.tera");

/// Renders the definition page template
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    /// Use the template at `template_path`, or the built-in one when `None`
    pub fn new(template_path: Option<&Path>) -> Result<Self> {
        let mut tera = Tera::default();
        match template_path {
            Some(path) => {
                log::debug!("Loading page template from {}", path.display());
                if !path.is_file() {
                    return Err(Error::template(format!(
                        "Template file not found: {}",
                        path.display()
                    )));
                }
                tera.add_template_file(path, Some(TEMPLATE_NAME))?;
            }
            None => tera.add_raw_template(TEMPLATE_NAME, BUILTIN_TEMPLATE)?,
        }
        Ok(Self { tera })
    }

    /// Render the page for the document named `name`
    pub fn render(&self, name: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("name", name);
        self.tera.render(TEMPLATE_NAME, &context).map_err(|e| {
            log::error!("Template rendering failed for '{}': {}", name, e);
            Error::template(format!("Failed to render page for '{}': {}", name, e))
        })
    }
}

/// Write an HTML page next to every `*.json` file below `root`.
///
/// Files are visited in sorted order; returns the written paths.
pub async fn bootstrap_html<P: AsRef<Path>>(
    root: P,
    renderer: &HtmlRenderer,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let is_json = entry.path().extension().and_then(|e| e.to_str()) == Some("json");
        if entry.file_type().is_file() && is_json {
            documents.push(entry.into_path());
        }
    }

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let name = document
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                Error::template(format!("Invalid document name: {}", document.display()))
            })?;
        let html = document.with_extension("html");
        fs::write(&html, renderer.render(name)?).await?;
        log::info!("{} written", html.display());
        written.push(html);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_template_escapes_name() {
        let renderer = HtmlRenderer::new(None).unwrap();
        let page = renderer.render("Current_v1.0").unwrap();
        assert!(page.contains("<title>Current_v1.0</title>"));
        assert!(page.contains("spec-url=\"Current_v1.0.json\""));

        let page = renderer.render("<b>").unwrap();
        assert!(page.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_missing_custom_template() {
        let err = HtmlRenderer::new(Some(Path::new("/nonexistent/page.html"))).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[tokio::test]
    async fn test_one_page_per_document() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("Energy/Battery");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(nested.join("ChargingHistory_v1.0.json"), "{}")?;
        std::fs::write(dir.path().join("AirQuality.json"), "{}")?;
        std::fs::write(dir.path().join("README.md"), "# docs")?;

        let renderer = HtmlRenderer::new(None)?;
        let written = bootstrap_html(dir.path(), &renderer).await?;

        assert_eq!(
            written,
            vec![
                dir.path().join("AirQuality.html"),
                nested.join("ChargingHistory_v1.0.html"),
            ]
        );
        let page = std::fs::read_to_string(nested.join("ChargingHistory_v1.0.html"))?;
        assert!(page.contains("ChargingHistory_v1.0.json"));
        assert!(!dir.path().join("README.html").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_template() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("page.html.tera");
        std::fs::write(&template, "<h1>{{ name }}</h1>")?;
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out)?;
        std::fs::write(out.join("Details.json"), "{}")?;

        let renderer = HtmlRenderer::new(Some(&template))?;
        bootstrap_html(&out, &renderer).await?;
        assert_eq!(
            std::fs::read_to_string(out.join("Details.html"))?,
            "<h1>Details</h1>"
        );
        Ok(())
    }
}
