//! Declarative schema model for data product payloads.
//!
//! A [`Model`] is an ordered list of [`Field`]s. Each field carries its type,
//! whether it is required, and the metadata published with it: title,
//! description, example value and validation constraints. Models nest through
//! [`FieldType::Object`]; closed string sets are [`Enumeration`]s.
//!
//! Definitions are normally declared in code with the builder methods:
//!
//! ```
//! use dataproduct_core::schema::{Field, Model};
//!
//! let request = Model::new("CurrentAirQualityRequest")
//!     .field(
//!         Field::number("lat")
//!             .title("Latitude")
//!             .example(60.192059)
//!             .ge(-90.0)
//!             .le(90.0),
//!     );
//! assert_eq!(request.fields.len(), 1);
//! ```
//!
//! All types are serde-serializable so the same shapes can be written as YAML.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::utils::camelize;

/// Validation constraints attached to a field or to array items
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the value must match (searched, not anchored)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ge: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub le: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, re: impl Into<String>) -> Self {
        self.pattern = Some(re.into());
        self
    }

    pub fn ge(mut self, v: f64) -> Self {
        self.ge = Some(v);
        self
    }

    pub fn gt(mut self, v: f64) -> Self {
        self.gt = Some(v);
        self
    }

    pub fn le(mut self, v: f64) -> Self {
        self.le = Some(v);
        self
    }

    pub fn lt(mut self, v: f64) -> Self {
        self.lt = Some(v);
        self
    }
}

/// Closed set of string literals
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    pub name: String,
    pub values: Vec<String>,
}

impl Enumeration {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Element type and item-level constraints of an array field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub items: Box<FieldType>,
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub item_constraints: Constraints,
    /// Set semantics: items must be distinct
    #[serde(default)]
    pub unique: bool,
}

/// Type of a field value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    DateTime,
    Date,
    Array(ArrayType),
    Object(Model),
    Enum(Enumeration),
}

impl FieldType {
    /// List of `items`
    pub fn list(items: FieldType) -> Self {
        Self::Array(ArrayType {
            items: Box::new(items),
            item_constraints: Constraints::default(),
            unique: false,
        })
    }

    /// Set of `items`
    pub fn set(items: FieldType) -> Self {
        Self::Array(ArrayType {
            items: Box::new(items),
            item_constraints: Constraints::default(),
            unique: true,
        })
    }

    /// JSON Schema `type` keyword this field type is published as
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::String | Self::DateTime | Self::Date | Self::Enum(_) => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

/// A single named field of a model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
}

impl Field {
    /// Required field of the given type
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            default: None,
            title: None,
            description: None,
            example: None,
            constraints: Constraints::default(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Date)
    }

    pub fn list(name: impl Into<String>, items: FieldType) -> Self {
        Self::new(name, FieldType::list(items))
    }

    pub fn set(name: impl Into<String>, items: FieldType) -> Self {
        Self::new(name, FieldType::set(items))
    }

    pub fn object(name: impl Into<String>, model: Model) -> Self {
        Self::new(name, FieldType::Object(model))
    }

    pub fn enumeration(name: impl Into<String>, enumeration: Enumeration) -> Self {
        Self::new(name, FieldType::Enum(enumeration))
    }

    /// Mark the field as not required
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Default value; a field with a default is never required
    pub fn default_value(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self.required = false;
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

    pub fn example(mut self, example: impl Into<JsonValue>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.constraints.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.constraints.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, re: impl Into<String>) -> Self {
        self.constraints.pattern = Some(re.into());
        self
    }

    pub fn ge(mut self, v: f64) -> Self {
        self.constraints.ge = Some(v);
        self
    }

    pub fn gt(mut self, v: f64) -> Self {
        self.constraints.gt = Some(v);
        self
    }

    pub fn le(mut self, v: f64) -> Self {
        self.constraints.le = Some(v);
        self
    }

    pub fn lt(mut self, v: f64) -> Self {
        self.constraints.lt = Some(v);
        self
    }

    pub fn min_items(mut self, n: usize) -> Self {
        self.constraints.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.constraints.max_items = Some(n);
        self
    }

    /// Constraints applied to every item of an array field. No-op on other types.
    pub fn item_constraints(mut self, constraints: Constraints) -> Self {
        if let FieldType::Array(array) = &mut self.ty {
            array.item_constraints = constraints;
        }
        self
    }
}

/// A named, ordered collection of fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Publish fields under lowerCamelCase aliases
    #[serde(default = "default_true")]
    pub camel_case: bool,
}

impl Model {
    /// Model publishing its fields in lowerCamelCase
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            camel_case: true,
        }
    }

    /// Model publishing its fields under their declared names
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            camel_case: false,
            ..Self::new(name)
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// New model named `name` that starts with all fields of `self`
    pub fn extend(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Name a field is published under
    pub fn published_name(&self, field: &Field) -> String {
        if self.camel_case {
            camelize(&field.name)
        } else {
            field.name.clone()
        }
    }

    /// Published names of the required fields, in declaration order
    pub fn required_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| self.published_name(f))
            .collect()
    }
}

/// A named schema reachable from a definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Component<'a> {
    Model(&'a Model),
    Enum(&'a Enumeration),
}

impl Component<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Model(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }
}

/// Raised when one component name is bound to two different shapes
#[derive(Debug, Clone, PartialEq, Error)]
#[error("component '{name}' is declared with two different shapes")]
pub struct ComponentConflict {
    pub name: String,
}

/// Collect every model and enumeration reachable from `roots`, depth first,
/// each name once.
pub fn collect_components<'a>(
    roots: &[&'a Model],
) -> Result<Vec<Component<'a>>, ComponentConflict> {
    let mut out = Vec::new();
    for root in roots {
        visit_model(root, &mut out)?;
    }
    Ok(out)
}

fn register<'a>(
    component: Component<'a>,
    out: &mut Vec<Component<'a>>,
) -> Result<bool, ComponentConflict> {
    match out.iter().find(|c| c.name() == component.name()) {
        Some(existing) if *existing == component => Ok(false),
        Some(_) => Err(ComponentConflict {
            name: component.name().to_string(),
        }),
        None => {
            out.push(component);
            Ok(true)
        }
    }
}

fn visit_model<'a>(
    model: &'a Model,
    out: &mut Vec<Component<'a>>,
) -> Result<(), ComponentConflict> {
    if !register(Component::Model(model), out)? {
        return Ok(());
    }
    for field in &model.fields {
        visit_type(&field.ty, out)?;
    }
    Ok(())
}

fn visit_type<'a>(ty: &'a FieldType, out: &mut Vec<Component<'a>>) -> Result<(), ComponentConflict> {
    match ty {
        FieldType::Object(model) => visit_model(model, out),
        FieldType::Enum(e) => register(Component::Enum(e), out).map(|_| ()),
        FieldType::Array(array) => visit_type(&array.items, out),
        _ => Ok(()),
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn voltage() -> Model {
        Model::new("Voltage")
            .field(Field::number("min").title("Minimum voltage").example(38.0))
            .field(Field::number("max").title("Maximum voltage").example(56.0))
    }

    #[test]
    fn test_default_value_makes_field_optional() {
        let field = Field::integer("limit").default_value(100).ge(1.0).le(100.0);
        assert!(!field.required);
        assert_eq!(field.default, Some(json!(100)));
        assert_eq!(field.constraints.le, Some(100.0));
    }

    #[test]
    fn test_published_names() {
        let model = Model::new("Req").field(Field::string("company_id"));
        assert_eq!(model.published_name(&model.fields[0]), "companyId");

        let plain = Model::plain("Req").field(Field::string("company_id"));
        assert_eq!(plain.published_name(&plain.fields[0]), "company_id");
    }

    #[test]
    fn test_extend_keeps_parent_fields() {
        let response = Model::new("CreateAssignmentResponse")
            .field(Field::string("key_id"))
            .field(Field::string("lock_id"));
        let request = response
            .extend("CreateAssignmentRequest")
            .field(Field::string("shared_secret").optional());

        assert_eq!(request.name, "CreateAssignmentRequest");
        assert_eq!(request.fields.len(), 3);
        assert_eq!(request.required_names(), vec!["keyId", "lockId"]);
        assert_eq!(response.fields.len(), 2);
    }

    #[test]
    fn test_item_constraints_only_apply_to_arrays() {
        let langs = Field::list("languages", FieldType::String)
            .item_constraints(Constraints::new().min_length(2).max_length(2));
        match &langs.ty {
            FieldType::Array(array) => assert_eq!(array.item_constraints.max_length, Some(2)),
            other => panic!("unexpected type {other:?}"),
        }

        let plain = Field::string("code").item_constraints(Constraints::new().min_length(2));
        assert!(plain.constraints.is_empty());
    }

    #[test]
    fn test_collect_components_dedupes_identical_shapes() {
        let tce = Model::new("EmissionsPerTCE").field(Field::number("emissions").optional());
        let road = Model::new("RoadLeg").field(Field::list("emissions_per_tce", FieldType::Object(tce.clone())));
        let sea = Model::new("SeaLeg").field(Field::list("emissions_per_tce", FieldType::Object(tce)));
        let response = Model::new("Response")
            .field(Field::list("road", FieldType::Object(road)))
            .field(Field::list("sea", FieldType::Object(sea)))
            .field(Field::enumeration("cell_type", Enumeration::new("CellType", ["a", "b"])));

        let names: Vec<_> = collect_components(&[&response])
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Response", "RoadLeg", "EmissionsPerTCE", "SeaLeg", "CellType"]
        );
    }

    #[test]
    fn test_collect_components_rejects_conflicting_shapes() {
        let response = Model::new("Response")
            .field(Field::object("a", voltage()))
            .field(Field::object("b", Model::new("Voltage").field(Field::number("nominal"))));

        let err = collect_components(&[&response]).unwrap_err();
        assert_eq!(err.name, "Voltage");
    }

    #[test]
    fn test_yaml_shape() {
        let yaml = r#"
name: Capital
fields:
  - name: name
    type: { kind: string }
    title: Name
    example: Helsinki
  - name: lat
    type: { kind: number }
    required: false
    constraints: { ge: -90.0, le: 90.0 }
"#;
        let model: Model = serde_yaml::from_str(yaml).unwrap();
        assert!(model.camel_case);
        assert_eq!(model.fields[0].example, Some(json!("Helsinki")));
        assert!(model.fields[0].required);
        assert!(!model.fields[1].required);
        assert_eq!(model.fields[1].constraints.ge, Some(-90.0));
    }
}
