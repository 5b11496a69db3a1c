//! The metadata envelope wrapping one request/response schema pair.

use serde::{Deserialize, Serialize};

use crate::schema::{collect_components, Component, ComponentConflict, Model};

/// A named, versioned declaration of one data product endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataProductDefinition {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operation summary; older definitions set this instead of a title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Operation description; falls back to `description`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_description: Option<String>,
    #[serde(default)]
    pub requires_authorization: bool,
    #[serde(default)]
    pub requires_consent: bool,
    #[serde(default)]
    pub deprecated: bool,
    pub request: Model,
    pub response: Model,
}

impl DataProductDefinition {
    pub fn new(request: Model, response: Model) -> Self {
        Self {
            version: default_version(),
            title: None,
            description: None,
            summary: None,
            route_description: None,
            requires_authorization: false,
            requires_consent: false,
            deprecated: false,
            request,
            response,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn route_description(mut self, route_description: impl Into<String>) -> Self {
        self.route_description = Some(route_description.into());
        self
    }

    pub fn requires_authorization(mut self, yes: bool) -> Self {
        self.requires_authorization = yes;
        self
    }

    pub fn requires_consent(mut self, yes: bool) -> Self {
        self.requires_consent = yes;
        self
    }

    pub fn deprecated(mut self, yes: bool) -> Self {
        self.deprecated = yes;
        self
    }

    /// Title, else summary, else `fallback` (usually the path stem)
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or(fallback)
    }

    /// Description published on the operation
    pub fn operation_description(&self) -> Option<&str> {
        self.route_description
            .as_deref()
            .or(self.description.as_deref())
    }

    /// Every model and enumeration of the definition, request side first
    pub fn components(&self) -> Result<Vec<Component<'_>>, ComponentConflict> {
        collect_components(&[&self.request, &self.response])
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn definition() -> DataProductDefinition {
        DataProductDefinition::new(
            Model::new("PersonDetailsRequest"),
            Model::new("PersonDetailsResponse").field(Field::string("name")),
        )
    }

    #[test]
    fn test_defaults() {
        let def = definition();
        assert_eq!(def.version, "0.1.0");
        assert!(!def.requires_authorization);
        assert!(!def.requires_consent);
        assert!(!def.deprecated);
    }

    #[test]
    fn test_display_title_fallbacks() {
        let def = definition();
        assert_eq!(def.display_title("Details"), "Details");

        let def = definition().summary("Person details");
        assert_eq!(def.display_title("Details"), "Person details");

        let def = definition().summary("Person details").title("Person");
        assert_eq!(def.display_title("Details"), "Person");
    }

    #[test]
    fn test_operation_description_prefers_route_description() {
        let def = definition().description("Long");
        assert_eq!(def.operation_description(), Some("Long"));
        let def = def.route_description("Short");
        assert_eq!(def.operation_description(), Some("Short"));
    }

    #[test]
    fn test_components_request_first() {
        let def = definition();
        let names: Vec<_> = def
            .components()
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["PersonDetailsRequest", "PersonDetailsResponse"]);
    }
}
