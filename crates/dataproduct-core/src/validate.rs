//! Consistency checks for data product definitions.
//!
//! Every example and default value must satisfy the type and constraints of
//! the field it is attached to, enumerations must be closed sets of distinct
//! literals and field names must be unique within their model. Checks collect
//! every violation instead of stopping at the first.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map as JsonMap, Value as JsonValue};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::definition::DataProductDefinition;
use crate::openapi::error_models;
use crate::schema::{
    collect_components, ComponentConflict, Constraints, Enumeration, FieldType, Model,
};

static PATTERNS: Lazy<Mutex<HashMap<String, Result<Regex, String>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// What is wrong at a location
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViolationKind {
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("length {actual} is shorter than min_length {min}")]
    TooShort { actual: usize, min: usize },

    #[error("length {actual} is longer than max_length {max}")]
    TooLong { actual: usize, max: usize },

    #[error("'{value}' does not match pattern '{pattern}'")]
    PatternMismatch { value: String, pattern: String },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{value} violates bound {bound}")]
    OutOfRange { value: f64, bound: String },

    #[error("{actual} items, fewer than min_items {min}")]
    TooFewItems { actual: usize, min: usize },

    #[error("{actual} items, more than max_items {max}")]
    TooManyItems { actual: usize, max: usize },

    #[error("set contains duplicate item {item}")]
    DuplicateItem { item: String },

    #[error("'{value}' is not a member of {enumeration}")]
    NotInEnum { value: String, enumeration: String },

    #[error("enumeration {name} has no values")]
    EmptyEnum { name: String },

    #[error("enumeration {name} lists '{value}' more than once")]
    DuplicateEnumValue { name: String, value: String },

    #[error("model {model} declares field '{field}' more than once")]
    DuplicateField { model: String, field: String },

    #[error("required field '{field}' is missing")]
    MissingRequired { field: String },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error(transparent)]
    Conflict(#[from] ComponentConflict),
}

/// A single problem found in a definition
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted path, e.g. `response.voltage.min (example)`
    pub location: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Violations of every catalog entry that has any, in catalog order
pub fn validate_catalog(catalog: &Catalog) -> Vec<(String, Vec<Violation>)> {
    catalog
        .iter()
        .filter_map(|entry| {
            let violations = validate_definition(&entry.definition);
            if violations.is_empty() {
                None
            } else {
                Some((entry.path.clone(), violations))
            }
        })
        .collect()
}

/// Check a definition's request and response models.
///
/// Component names are checked against the standard error models too, since
/// the generated document publishes them side by side.
pub fn validate_definition(definition: &DataProductDefinition) -> Vec<Violation> {
    let mut checker = Checker::default();
    let errors = error_models();
    let mut roots = vec![&definition.request, &definition.response];
    roots.extend(errors.iter());
    if let Err(conflict) = collect_components(&roots) {
        checker.push("components", conflict.into());
    }
    checker.model(&definition.request, "request");
    checker.model(&definition.response, "response");
    checker.violations
}

/// Check a standalone model, e.g. one loaded from a data file
pub fn validate_model(model: &Model) -> Vec<Violation> {
    let mut checker = Checker::default();
    checker.model(model, &model.name);
    checker.violations
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn push(&mut self, location: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            location: location.into(),
            kind,
        });
    }

    fn model(&mut self, model: &Model, location: &str) {
        let mut seen = HashSet::new();
        for field in &model.fields {
            let published = model.published_name(field);
            let fresh_name = seen.insert(field.name.clone());
            let fresh_alias = published == field.name || seen.insert(published);
            if !fresh_name || !fresh_alias {
                self.push(
                    location,
                    ViolationKind::DuplicateField {
                        model: model.name.clone(),
                        field: field.name.clone(),
                    },
                );
            }
        }

        for field in &model.fields {
            let field_location = format!("{location}.{}", field.name);
            if let Some(example) = &field.example {
                self.value(
                    &field.ty,
                    &field.constraints,
                    example,
                    &format!("{field_location} (example)"),
                );
            }
            if let Some(default) = &field.default {
                self.value(
                    &field.ty,
                    &field.constraints,
                    default,
                    &format!("{field_location} (default)"),
                );
            }
            self.structure(&field.ty, &field_location);
        }
    }

    fn structure(&mut self, ty: &FieldType, location: &str) {
        match ty {
            FieldType::Object(model) => self.model(model, location),
            FieldType::Enum(enumeration) => self.enumeration(enumeration, location),
            FieldType::Array(array) => self.structure(&array.items, &format!("{location}[]")),
            _ => {}
        }
    }

    fn enumeration(&mut self, enumeration: &Enumeration, location: &str) {
        if enumeration.values.is_empty() {
            self.push(
                location,
                ViolationKind::EmptyEnum {
                    name: enumeration.name.clone(),
                },
            );
        }
        let mut seen = HashSet::new();
        for value in &enumeration.values {
            if !seen.insert(value.as_str()) {
                self.push(
                    location,
                    ViolationKind::DuplicateEnumValue {
                        name: enumeration.name.clone(),
                        value: value.clone(),
                    },
                );
            }
        }
    }

    fn value(
        &mut self,
        ty: &FieldType,
        constraints: &Constraints,
        value: &JsonValue,
        location: &str,
    ) {
        match ty {
            FieldType::String => match value.as_str() {
                Some(s) => self.string(s, constraints, location),
                None => self.mismatch("string", value, location),
            },
            FieldType::DateTime => match value.as_str() {
                Some(s) if is_datetime(s) => {}
                _ => self.mismatch("date-time", value, location),
            },
            FieldType::Date => match value.as_str() {
                Some(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => {}
                _ => self.mismatch("date", value, location),
            },
            FieldType::Integer => {
                if value.is_i64() || value.is_u64() {
                    self.number(value.as_f64().unwrap_or_default(), constraints, location);
                } else {
                    self.mismatch("integer", value, location);
                }
            }
            FieldType::Number => match value.as_f64() {
                Some(n) => self.number(n, constraints, location),
                None => self.mismatch("number", value, location),
            },
            FieldType::Boolean => {
                if !value.is_boolean() {
                    self.mismatch("boolean", value, location);
                }
            }
            FieldType::Enum(enumeration) => match value.as_str() {
                Some(s) if enumeration.contains(s) => {}
                Some(s) => self.push(
                    location,
                    ViolationKind::NotInEnum {
                        value: s.to_string(),
                        enumeration: enumeration.name.clone(),
                    },
                ),
                None => self.mismatch("string", value, location),
            },
            FieldType::Array(array) => {
                let Some(items) = value.as_array() else {
                    self.mismatch("array", value, location);
                    return;
                };
                if let Some(min) = constraints.min_items {
                    if items.len() < min {
                        self.push(location, ViolationKind::TooFewItems { actual: items.len(), min });
                    }
                }
                if let Some(max) = constraints.max_items {
                    if items.len() > max {
                        self.push(location, ViolationKind::TooManyItems { actual: items.len(), max });
                    }
                }
                if array.unique {
                    for (i, item) in items.iter().enumerate() {
                        if items[..i].contains(item) {
                            self.push(
                                location,
                                ViolationKind::DuplicateItem {
                                    item: item.to_string(),
                                },
                            );
                        }
                    }
                }
                for (i, item) in items.iter().enumerate() {
                    self.value(
                        &array.items,
                        &array.item_constraints,
                        item,
                        &format!("{location}[{i}]"),
                    );
                }
            }
            FieldType::Object(model) => match value.as_object() {
                Some(object) => self.object(model, object, location),
                None => self.mismatch("object", value, location),
            },
        }
    }

    fn object(&mut self, model: &Model, object: &JsonMap<String, JsonValue>, location: &str) {
        let mut known = HashSet::new();
        for field in &model.fields {
            let key = model.published_name(field);
            match object.get(&key) {
                None if field.required => self.push(
                    location,
                    ViolationKind::MissingRequired { field: key.clone() },
                ),
                None => {}
                Some(JsonValue::Null) if !field.required => {}
                Some(v) => self.value(
                    &field.ty,
                    &field.constraints,
                    v,
                    &format!("{location}.{key}"),
                ),
            }
            known.insert(key);
        }
        for key in object.keys() {
            if !known.contains(key) {
                self.push(location, ViolationKind::UnknownField { field: key.clone() });
            }
        }
    }

    fn string(&mut self, s: &str, constraints: &Constraints, location: &str) {
        let len = s.chars().count();
        if let Some(min) = constraints.min_length {
            if len < min {
                self.push(location, ViolationKind::TooShort { actual: len, min });
            }
        }
        if let Some(max) = constraints.max_length {
            if len > max {
                self.push(location, ViolationKind::TooLong { actual: len, max });
            }
        }
        if let Some(pattern) = &constraints.pattern {
            match pattern_matches(pattern, s) {
                Ok(true) => {}
                Ok(false) => self.push(
                    location,
                    ViolationKind::PatternMismatch {
                        value: s.to_string(),
                        pattern: pattern.clone(),
                    },
                ),
                Err(reason) => self.push(
                    location,
                    ViolationKind::InvalidPattern {
                        pattern: pattern.clone(),
                        reason,
                    },
                ),
            }
        }
    }

    fn number(&mut self, n: f64, constraints: &Constraints, location: &str) {
        let bounds = [
            (constraints.ge, ">=", n >= constraints.ge.unwrap_or(f64::MIN)),
            (constraints.gt, ">", constraints.gt.map_or(true, |b| n > b)),
            (constraints.le, "<=", n <= constraints.le.unwrap_or(f64::MAX)),
            (constraints.lt, "<", constraints.lt.map_or(true, |b| n < b)),
        ];
        for (bound, op, ok) in bounds {
            if let (Some(bound), false) = (bound, ok) {
                self.push(
                    location,
                    ViolationKind::OutOfRange {
                        value: n,
                        bound: format!("{op} {bound}"),
                    },
                );
            }
        }
    }

    fn mismatch(&mut self, expected: &'static str, value: &JsonValue, location: &str) {
        self.push(
            location,
            ViolationKind::TypeMismatch {
                expected,
                found: value.to_string(),
            },
        );
    }
}

fn is_datetime(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn pattern_matches(pattern: &str, value: &str) -> Result<bool, String> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let compiled = cache
        .entry(pattern.to_string())
        .or_insert_with(|| Regex::new(pattern).map_err(|e| e.to_string()));
    compiled.as_ref().map(|re| re.is_match(value)).map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Model};
    use serde_json::json;

    fn kinds(violations: &[Violation]) -> Vec<&ViolationKind> {
        violations.iter().map(|v| &v.kind).collect()
    }

    fn single(field: Field) -> Vec<Violation> {
        validate_model(&Model::new("M").field(field))
    }

    #[test]
    fn test_valid_definition_has_no_violations() {
        let def = DataProductDefinition::new(
            Model::new("Req").field(
                Field::string("key_id")
                    .example("a1b2c3d4e5f6890")
                    .min_length(1)
                    .pattern(r"^[0-9a-f]+$"),
            ),
            Model::new("Resp").field(Field::boolean("exists").example(true)),
        );
        assert!(validate_definition(&def).is_empty());
    }

    #[test]
    fn test_pattern_and_length() {
        let violations = single(
            Field::string("key_id")
                .example("XYZ")
                .max_length(2)
                .pattern(r"^[0-9a-f]+$"),
        );
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0].kind, ViolationKind::TooLong { actual: 3, max: 2 }));
        assert!(matches!(violations[1].kind, ViolationKind::PatternMismatch { .. }));
        assert_eq!(violations[0].location, "M.key_id (example)");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let violations = single(Field::string("x").example("a").pattern("(unclosed"));
        assert!(matches!(violations[0].kind, ViolationKind::InvalidPattern { .. }));
    }

    #[test]
    fn test_numeric_bounds_and_defaults() {
        let violations = single(Field::integer("limit").default_value(101).ge(1.0).le(100.0));
        assert_eq!(
            kinds(&violations),
            vec![&ViolationKind::OutOfRange {
                value: 101.0,
                bound: "<= 100".into()
            }]
        );
        assert_eq!(violations[0].location, "M.limit (default)");

        let violations = single(Field::number("lat").example(-90.5).ge(-90.0).le(90.0));
        assert_eq!(violations.len(), 1);

        assert!(single(Field::number("x").example(0.0).gt(0.0)).len() == 1);
        assert!(single(Field::number("x").example(0.0).lt(0.0)).len() == 1);
        assert!(single(Field::number("x").example(338455)).is_empty());
    }

    #[test]
    fn test_type_mismatches() {
        assert!(matches!(
            single(Field::integer("n").example(1.5))[0].kind,
            ViolationKind::TypeMismatch { expected: "integer", .. }
        ));
        assert!(matches!(
            single(Field::string("s").example(5))[0].kind,
            ViolationKind::TypeMismatch { expected: "string", .. }
        ));
        assert!(matches!(
            single(Field::boolean("b").example("true"))[0].kind,
            ViolationKind::TypeMismatch { expected: "boolean", .. }
        ));
    }

    #[test]
    fn test_datetime_and_date_formats() {
        assert!(single(Field::datetime("t").example("2022-09-10T00:00:00")).is_empty());
        assert!(single(Field::datetime("t").example("2020-04-03T13:00:00Z")).is_empty());
        assert_eq!(single(Field::datetime("t").example("yesterday")).len(), 1);
        assert!(single(Field::date("d").example("2012-02-23")).is_empty());
        assert_eq!(single(Field::date("d").example("23.02.2012")).len(), 1);
    }

    #[test]
    fn test_enum_membership() {
        let cell = Enumeration::new("CellType", ["lithium-titanate", "lithium-ion polymer"]);
        assert!(single(Field::enumeration("cell_type", cell.clone()).example("lithium-titanate")).is_empty());

        let violations = single(Field::enumeration("cell_type", cell).example("lead-acid"));
        assert_eq!(
            kinds(&violations),
            vec![&ViolationKind::NotInEnum {
                value: "lead-acid".into(),
                enumeration: "CellType".into()
            }]
        );
    }

    #[test]
    fn test_enum_shape() {
        let violations = single(Field::enumeration("e", Enumeration::new("E", ["a", "a"])));
        assert!(matches!(violations[0].kind, ViolationKind::DuplicateEnumValue { .. }));
        let violations = single(Field::enumeration("e", Enumeration::new("E", Vec::<String>::new())));
        assert!(matches!(violations[0].kind, ViolationKind::EmptyEnum { .. }));
    }

    #[test]
    fn test_duplicate_fields_and_aliases() {
        let model = Model::new("M")
            .field(Field::string("company_id"))
            .field(Field::string("companyId"));
        let violations = validate_model(&model);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0].kind, ViolationKind::DuplicateField { .. }));

        let plain = Model::plain("M")
            .field(Field::string("company_id"))
            .field(Field::string("companyId"));
        assert!(validate_model(&plain).is_empty());
    }

    #[test]
    fn test_array_items_and_sets() {
        let langs = Field::list("languages", FieldType::String)
            .example(json!(["fi", "swe"]))
            .item_constraints(Constraints::new().min_length(2).max_length(2));
        let violations = single(langs);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "M.languages (example)[1]");

        let standards = Field::set("standards", FieldType::String).example(json!(["A", "A"]));
        assert!(matches!(
            single(standards)[0].kind,
            ViolationKind::DuplicateItem { .. }
        ));

        let bounded = Field::list("xs", FieldType::Integer)
            .example(json!([1, 2, 3]))
            .max_items(2)
            .min_items(1);
        assert!(matches!(
            single(bounded)[0].kind,
            ViolationKind::TooManyItems { actual: 3, max: 2 }
        ));
    }

    #[test]
    fn test_object_examples() {
        let capital = Model::new("Capital")
            .field(Field::string("name"))
            .field(Field::number("lat").le(90.0))
            .field(Field::number("lon").optional());
        let field = Field::object("capital", capital).example(json!({
            "lat": 91.0,
            "lon": null,
            "population": 600000
        }));
        let violations = single(field);
        assert_eq!(
            kinds(&violations),
            vec![
                &ViolationKind::MissingRequired { field: "name".into() },
                &ViolationKind::OutOfRange {
                    value: 91.0,
                    bound: "<= 90".into()
                },
                &ViolationKind::UnknownField {
                    field: "population".into()
                },
            ]
        );
    }

    #[test]
    fn test_nested_model_locations() {
        let voltage = Model::new("Voltage").field(Field::number("min").example("low"));
        let def = DataProductDefinition::new(
            Model::new("Req"),
            Model::new("Resp").field(Field::object("voltage", voltage)),
        );
        let violations = validate_definition(&def);
        assert_eq!(violations[0].location, "response.voltage.min (example)");
        assert_eq!(
            violations[0].to_string(),
            "response.voltage.min (example): expected number, found \"low\""
        );
    }

    #[test]
    fn test_component_conflicts_are_reported() {
        let def = DataProductDefinition::new(
            Model::new("Shared").field(Field::string("a")),
            Model::new("Resp").field(Field::object("x", Model::new("Shared"))),
        );
        let violations = validate_definition(&def);
        assert_eq!(violations[0].location, "components");
        assert!(matches!(violations[0].kind, ViolationKind::Conflict(_)));
    }

    #[test]
    fn test_clash_with_error_model_is_reported() {
        let def = DataProductDefinition::new(
            Model::new("Req"),
            Model::new("Resp").field(Field::object(
                "detail",
                Model::new("NotFound").field(Field::string("why")),
            )),
        );
        let violations = validate_definition(&def);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "components");
        assert!(matches!(violations[0].kind, ViolationKind::Conflict(_)));
    }
}
