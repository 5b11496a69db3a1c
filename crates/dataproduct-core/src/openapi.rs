//! OpenAPI document generation and reading.
//!
//! [`to_openapi`] turns one catalog entry into a self-contained OpenAPI 3.0
//! document: a single `POST /{path}` operation whose request body and `200`
//! response reference the definition's models, the standard error responses
//! of the data product gateway, and every model and enumeration under
//! `components.schemas`.
//!
//! [`OpenApiContext`] reads such documents back, which is what the round-trip
//! checks over the built-in catalog use.
//!
//! # Examples
//!
//! ```
//! use dataproduct_core::openapi::{to_openapi, ConversionOptions};
//! use dataproduct_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let definition = catalog.get("AirQuality/Current_v1.0").unwrap();
//! let doc = to_openapi("AirQuality/Current_v1.0", definition, &ConversionOptions::default()).unwrap();
//! assert_eq!(doc["info"]["version"], "1.0.0");
//! assert!(doc["paths"]["/AirQuality/Current_v1.0"]["post"].is_object());
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::definition::DataProductDefinition;
use crate::schema::{
    collect_components, Component, Constraints, Enumeration, Field, FieldType, Model,
};
use crate::utils::{operation_id, path_stem};
use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::{json, Map as JsonMap, Value as JsonValue};
use tokio::fs;
use url::Url;

/// OpenAPI version of the generated documents
pub const OPENAPI_VERSION: &str = "3.0.2";

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
const JSON_CONTENT: &str = "application/json";

/// Settings that apply to every generated document
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Advertised in `servers` when set
    pub server_url: Option<Url>,
}

/// An error response every data product may return
struct ErrorResponse {
    status: &'static str,
    description: &'static str,
    model: Model,
}

fn error_model(name: &str, type_example: &str, message_example: &str) -> Model {
    Model::plain(name)
        .field(
            Field::string("type")
                .title("Error type")
                .example(type_example),
        )
        .field(
            Field::string("message")
                .title("Error message")
                .example(message_example),
        )
}

fn error_responses() -> Vec<ErrorResponse> {
    let validation_error = Model::plain("ValidationError")
        .field(Field::list("loc", FieldType::String).title("Location"))
        .field(Field::string("msg").title("Message"))
        .field(Field::string("type").title("Error Type"));

    vec![
        ErrorResponse {
            status: "401",
            description: "Unauthorized",
            model: error_model("Unauthorized", "unauthorized", "Missing or invalid authorization"),
        },
        ErrorResponse {
            status: "403",
            description: "Forbidden",
            model: error_model("Forbidden", "forbidden", "Access to the data product was denied"),
        },
        ErrorResponse {
            status: "404",
            description: "Not Found",
            model: error_model("NotFound", "not_found", "No data found for the request"),
        },
        ErrorResponse {
            status: "422",
            description: "Validation Error",
            model: Model::plain("HTTPValidationError").field(
                Field::list("detail", FieldType::Object(validation_error))
                    .optional()
                    .title("Detail"),
            ),
        },
        ErrorResponse {
            status: "444",
            description: "Data source not found",
            model: error_model(
                "DataSourceNotFound",
                "data_source_not_found",
                "Data source not found",
            ),
        },
        ErrorResponse {
            status: "500",
            description: "Internal Server Error",
            model: error_model("DataSourceError", "internal_server_error", "Internal server error")
                .field(Field::integer("status").title("Status code").example(500)),
        },
        ErrorResponse {
            status: "502",
            description: "Bad Gateway",
            model: error_model("BadGateway", "bad_gateway", "The data source returned an invalid response"),
        },
        ErrorResponse {
            status: "503",
            description: "Service Unavailable",
            model: error_model(
                "ServiceUnavailable",
                "service_unavailable",
                "The data source is temporarily unavailable",
            ),
        },
        ErrorResponse {
            status: "504",
            description: "Gateway Timeout",
            model: error_model("GatewayTimeout", "gateway_timeout", "The data source did not respond in time"),
        },
        ErrorResponse {
            status: "550",
            description: "Response does not conform to the definition",
            model: error_model(
                "DoesNotConformToDefinition",
                "does_not_conform_to_definition",
                "Response from the data source does not conform to the definition",
            ),
        },
    ]
}

/// Models of the standard error responses, published alongside every
/// definition's own components
pub fn error_models() -> Vec<Model> {
    error_responses().into_iter().map(|e| e.model).collect()
}

/// Build the OpenAPI document for the definition published at `path`
pub fn to_openapi(
    path: &str,
    definition: &DataProductDefinition,
    options: &ConversionOptions,
) -> crate::Result<JsonValue> {
    let path = path.trim_matches('/');
    let errors = error_responses();

    let mut roots = vec![&definition.request, &definition.response];
    roots.extend(errors.iter().map(|e| &e.model));
    let components = collect_components(&roots)
        .map_err(|e| Error::openapi(format!("Cannot convert '{}': {}", path, e)))?;

    let mut schemas = JsonMap::new();
    for component in &components {
        let schema = match component {
            Component::Model(model) => model_schema(model),
            Component::Enum(enumeration) => enum_schema(enumeration),
        };
        schemas.insert(component.name().to_string(), schema);
    }

    let mut responses = JsonMap::new();
    responses.insert(
        "200".to_string(),
        json_response("Successful Response", &definition.response.name),
    );
    for error in &errors {
        responses.insert(
            error.status.to_string(),
            json_response(error.description, &error.model.name),
        );
    }

    let title = definition.display_title(path_stem(path));

    let mut operation = JsonMap::new();
    operation.insert("summary".into(), json!(title));
    if let Some(description) = definition.operation_description() {
        operation.insert("description".into(), json!(description));
    }
    operation.insert("operationId".into(), json!(operation_id(path)));
    if definition.deprecated {
        operation.insert("deprecated".into(), json!(true));
    }
    operation.insert("parameters".into(), JsonValue::Array(header_parameters(definition)));
    operation.insert(
        "requestBody".into(),
        json!({
            "content": { JSON_CONTENT: { "schema": schema_ref(&definition.request.name) } },
            "required": true
        }),
    );
    operation.insert("responses".into(), JsonValue::Object(responses));

    let mut info = JsonMap::new();
    info.insert("title".into(), json!(title));
    if let Some(description) = &definition.description {
        info.insert("description".into(), json!(description));
    }
    info.insert("version".into(), json!(definition.version));

    let mut doc = JsonMap::new();
    doc.insert("openapi".into(), json!(OPENAPI_VERSION));
    doc.insert("info".into(), JsonValue::Object(info));
    if let Some(url) = &options.server_url {
        doc.insert("servers".into(), json!([{ "url": url.as_str() }]));
    }
    doc.insert(
        "paths".into(),
        json!({ format!("/{path}"): { "post": JsonValue::Object(operation) } }),
    );
    doc.insert("components".into(), json!({ "schemas": JsonValue::Object(schemas) }));

    Ok(JsonValue::Object(doc))
}

/// Check that a generated document deserializes as an OpenAPI 3.0 spec
pub fn verify(doc: &JsonValue) -> crate::Result<openapiv3::OpenAPI> {
    serde_json::from_value(doc.clone())
        .map_err(|e| Error::openapi(format!("Generated document is not valid OpenAPI: {}", e)))
}

fn header_parameters(definition: &DataProductDefinition) -> Vec<JsonValue> {
    let mut parameters = vec![json!({
        "name": "authorization",
        "in": "header",
        "required": definition.requires_authorization,
        "description": "User bearer token",
        "schema": { "title": "Authorization", "type": "string" }
    })];
    if definition.requires_consent {
        parameters.push(json!({
            "name": "x-consent-token",
            "in": "header",
            "required": true,
            "description": "Consent token for accessing the data product",
            "schema": { "title": "X-Consent-Token", "type": "string" }
        }));
    }
    parameters
}

fn schema_ref(name: &str) -> JsonValue {
    json!({ "$ref": format!("{}{}", SCHEMA_REF_PREFIX, name) })
}

fn json_response(description: &str, component: &str) -> JsonValue {
    json!({
        "description": description,
        "content": { JSON_CONTENT: { "schema": schema_ref(component) } }
    })
}

fn model_schema(model: &Model) -> JsonValue {
    let mut properties = JsonMap::new();
    for field in &model.fields {
        properties.insert(model.published_name(field), field_schema(field));
    }

    let mut schema = JsonMap::new();
    schema.insert("title".into(), json!(model.name));
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), JsonValue::Object(properties));
    let required = model.required_names();
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    JsonValue::Object(schema)
}

fn enum_schema(enumeration: &Enumeration) -> JsonValue {
    json!({
        "title": enumeration.name,
        "description": "An enumeration.",
        "enum": enumeration.values,
        "type": "string"
    })
}

fn field_schema(field: &Field) -> JsonValue {
    let mut schema = type_schema(&field.ty, &field.constraints);

    let annotated = field.title.is_some()
        || field.description.is_some()
        || field.example.is_some()
        || field.default.is_some();
    // Siblings of $ref are ignored in OpenAPI 3.0
    if annotated && schema.contains_key("$ref") {
        let mut wrapped = JsonMap::new();
        wrapped.insert("allOf".into(), json!([JsonValue::Object(schema)]));
        schema = wrapped;
    }

    if let Some(title) = &field.title {
        schema.insert("title".into(), json!(title));
    }
    if let Some(description) = &field.description {
        schema.insert("description".into(), json!(description));
    }
    if let Some(default) = &field.default {
        schema.insert("default".into(), default.clone());
    }
    if let Some(example) = &field.example {
        schema.insert("example".into(), example.clone());
    }
    JsonValue::Object(schema)
}

fn type_schema(ty: &FieldType, constraints: &Constraints) -> JsonMap<String, JsonValue> {
    let mut schema = JsonMap::new();
    match ty {
        FieldType::Object(model) => return as_map(schema_ref(&model.name)),
        FieldType::Enum(enumeration) => return as_map(schema_ref(&enumeration.name)),
        FieldType::String => {
            schema.insert("type".into(), json!("string"));
        }
        FieldType::DateTime => {
            schema.insert("type".into(), json!("string"));
            schema.insert("format".into(), json!("date-time"));
        }
        FieldType::Date => {
            schema.insert("type".into(), json!("string"));
            schema.insert("format".into(), json!("date"));
        }
        FieldType::Integer | FieldType::Number => {
            schema.insert("type".into(), json!(ty.json_type()));
        }
        FieldType::Boolean => {
            schema.insert("type".into(), json!("boolean"));
        }
        FieldType::Array(array) => {
            schema.insert("type".into(), json!("array"));
            schema.insert(
                "items".into(),
                JsonValue::Object(type_schema(&array.items, &array.item_constraints)),
            );
            if array.unique {
                schema.insert("uniqueItems".into(), json!(true));
            }
        }
    }
    apply_constraints(&mut schema, constraints);
    schema
}

fn apply_constraints(schema: &mut JsonMap<String, JsonValue>, constraints: &Constraints) {
    if let Some(n) = constraints.min_length {
        schema.insert("minLength".into(), json!(n));
    }
    if let Some(n) = constraints.max_length {
        schema.insert("maxLength".into(), json!(n));
    }
    if let Some(pattern) = &constraints.pattern {
        schema.insert("pattern".into(), json!(pattern));
    }
    // With both an inclusive and an exclusive bound, only the tighter one counts
    let lower = match (constraints.gt, constraints.ge) {
        (Some(gt), Some(ge)) if ge > gt => Some((ge, false)),
        (Some(gt), _) => Some((gt, true)),
        (None, ge) => ge.map(|ge| (ge, false)),
    };
    if let Some((minimum, exclusive)) = lower {
        schema.insert("minimum".into(), bound(minimum));
        if exclusive {
            schema.insert("exclusiveMinimum".into(), json!(true));
        }
    }
    let upper = match (constraints.lt, constraints.le) {
        (Some(lt), Some(le)) if le < lt => Some((le, false)),
        (Some(lt), _) => Some((lt, true)),
        (None, le) => le.map(|le| (le, false)),
    };
    if let Some((maximum, exclusive)) = upper {
        schema.insert("maximum".into(), bound(maximum));
        if exclusive {
            schema.insert("exclusiveMaximum".into(), json!(true));
        }
    }
    if let Some(n) = constraints.min_items {
        schema.insert("minItems".into(), json!(n));
    }
    if let Some(n) = constraints.max_items {
        schema.insert("maxItems".into(), json!(n));
    }
}

/// Whole bounds are written as integers so integer schemas stay integral
fn bound(value: f64) -> JsonValue {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

fn as_map(value: JsonValue) -> JsonMap<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        _ => JsonMap::new(),
    }
}

/// Represents a parsed OpenAPI document
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The raw JSON value of the OpenAPI spec
    pub json: JsonValue,
}

/// The POST operation of a data product document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefinitionOperation {
    pub id: String,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: bool,
    /// Component name referenced by the request body
    pub request: Option<String>,
    /// Component name referenced by the `200` response
    pub response: Option<String>,
}

/// A property of a component schema, reduced to what survives a round trip
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentField {
    pub name: String,
    pub json_type: String,
    pub required: bool,
}

impl OpenApiContext {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Load a document from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!(
                "Failed to parse OpenAPI spec at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse content as either JSON or YAML
    fn parse_content(content: &str) -> Result<Self, String> {
        if let Ok(json) = serde_json::from_str(content) {
            return Ok(Self { json });
        }
        if let Ok(json) = serde_yaml::from_str(content) {
            return Ok(Self { json });
        }
        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// All POST operations, in document order
    pub fn operations(&self) -> crate::Result<Vec<DefinitionOperation>> {
        let paths = self
            .json
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::openapi("Missing 'paths' object"))?;

        let mut operations = Vec::new();
        for (path, item) in paths {
            let Some(post) = item.get("post").and_then(JsonValue::as_object) else {
                continue;
            };
            let text = |key: &str| post.get(key).and_then(JsonValue::as_str).map(String::from);
            let request = post
                .get("requestBody")
                .and_then(|body| body.pointer("/content/application~1json/schema"))
                .and_then(ref_name);
            let response = post
                .get("responses")
                .and_then(|r| r.pointer("/200/content/application~1json/schema"))
                .and_then(ref_name);

            operations.push(DefinitionOperation {
                id: text("operationId").unwrap_or_else(|| operation_id(path)),
                path: path.clone(),
                summary: text("summary"),
                description: text("description"),
                deprecated: post
                    .get("deprecated")
                    .and_then(JsonValue::as_bool)
                    .unwrap_or(false),
                request,
                response,
            });
        }
        Ok(operations)
    }

    /// Look up a schema under `components.schemas`
    pub fn component(&self, name: &str) -> crate::Result<&JsonValue> {
        self.json
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::openapi("No components.schemas section"))?
            .get(name)
            .ok_or_else(|| Error::openapi(format!("Schema '{}' not found", name)))
    }

    /// Properties of an object component with their resolved JSON types
    pub fn component_fields(&self, name: &str) -> crate::Result<Vec<ComponentField>> {
        let schema = self.component(name)?;
        let required: Vec<&str> = schema
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|names| names.iter().filter_map(JsonValue::as_str).collect())
            .unwrap_or_default();
        let properties = match schema.get("properties").and_then(JsonValue::as_object) {
            Some(p) => p,
            None => return Ok(Vec::new()),
        };

        properties
            .iter()
            .map(|(prop, prop_schema)| {
                Ok(ComponentField {
                    name: prop.clone(),
                    json_type: self.resolve_type(prop_schema)?,
                    required: required.contains(&prop.as_str()),
                })
            })
            .collect()
    }

    /// `type` of a property schema, following `$ref` and single-entry `allOf`
    fn resolve_type(&self, schema: &JsonValue) -> crate::Result<String> {
        if let Some(typ) = schema.get("type").and_then(JsonValue::as_str) {
            return Ok(typ.to_string());
        }
        if let Some(name) = ref_name(schema) {
            return self.resolve_type(self.component(&name)?);
        }
        if let Some([inner]) = schema
            .get("allOf")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
        {
            return self.resolve_type(inner);
        }
        Err(Error::openapi(format!("Cannot resolve type of schema {}", schema)))
    }
}

/// Component name of a `{"$ref": "#/components/schemas/Name"}` schema
fn ref_name(schema: &JsonValue) -> Option<String> {
    schema
        .get("$ref")
        .and_then(JsonValue::as_str)
        .and_then(|r| r.strip_prefix(SCHEMA_REF_PREFIX))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataProductDefinition {
        let voltage = Model::new("Voltage").field(Field::number("nominal").example(48.3));
        let request = Model::new("BatteryRequest").field(
            Field::string("product_code")
                .title("Product Code")
                .example("MPP48V")
                .min_length(1)
                .max_length(20)
                .pattern("^[A-Z0-9]+$"),
        );
        let response = Model::new("BatteryResponse")
            .field(
                Field::object("voltage", voltage)
                    .title("Voltage")
                    .description("Voltage information"),
            )
            .field(
                Field::enumeration("cell_type", Enumeration::new("CellType", ["lto", "lipo"]))
                    .optional(),
            )
            .field(
                Field::integer("limit")
                    .default_value(100)
                    .ge(1.0)
                    .le(100.0),
            )
            .field(Field::set("tags", FieldType::String))
            .field(Field::number("ratio").optional().gt(0.5).lt(1.5));
        DataProductDefinition::new(request, response)
            .version("1.0.0")
            .title("Battery")
            .description("Battery details")
    }

    fn convert(def: &DataProductDefinition) -> JsonValue {
        to_openapi("Energy/Battery/Sample_v1.0", def, &ConversionOptions::default()).unwrap()
    }

    #[test]
    fn test_document_envelope() {
        let doc = convert(&sample());
        assert_eq!(doc["openapi"], OPENAPI_VERSION);
        assert_eq!(doc["info"]["title"], "Battery");
        assert_eq!(doc["info"]["description"], "Battery details");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert!(doc.get("servers").is_none());

        let post = &doc["paths"]["/Energy/Battery/Sample_v1.0"]["post"];
        assert_eq!(post["operationId"], "request_Energy_Battery_Sample_v1_0");
        assert_eq!(post["summary"], "Battery");
        assert!(post.get("deprecated").is_none());
        assert_eq!(
            post["requestBody"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/BatteryRequest"
        );
        let statuses: Vec<_> = post["responses"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            statuses,
            vec!["200", "401", "403", "404", "422", "444", "500", "502", "503", "504", "550"]
        );
    }

    #[test]
    fn test_field_schemas() {
        let doc = convert(&sample());
        let schemas = &doc["components"]["schemas"];

        let code = &schemas["BatteryRequest"]["properties"]["productCode"];
        assert_eq!(code["type"], "string");
        assert_eq!(code["minLength"], 1);
        assert_eq!(code["maxLength"], 20);
        assert_eq!(code["pattern"], "^[A-Z0-9]+$");
        assert_eq!(code["example"], "MPP48V");
        assert_eq!(schemas["BatteryRequest"]["required"], json!(["productCode"]));

        let response = &schemas["BatteryResponse"];
        assert_eq!(response["required"], json!(["voltage", "tags"]));
        assert_eq!(
            response["properties"]["voltage"],
            json!({
                "allOf": [{ "$ref": "#/components/schemas/Voltage" }],
                "title": "Voltage",
                "description": "Voltage information"
            })
        );
        assert_eq!(
            response["properties"]["cellType"],
            json!({ "$ref": "#/components/schemas/CellType" })
        );
        assert_eq!(
            response["properties"]["limit"],
            json!({ "type": "integer", "minimum": 1, "maximum": 100, "default": 100 })
        );
        assert_eq!(response["properties"]["tags"]["uniqueItems"], true);
        assert_eq!(
            response["properties"]["ratio"],
            json!({
                "type": "number",
                "minimum": 0.5,
                "exclusiveMinimum": true,
                "maximum": 1.5,
                "exclusiveMaximum": true
            })
        );

        assert_eq!(schemas["CellType"]["enum"], json!(["lto", "lipo"]));
        assert_eq!(schemas["Voltage"]["type"], "object");
        assert!(schemas["HTTPValidationError"].is_object());
        assert!(schemas["ValidationError"].is_object());
    }

    #[test]
    fn test_tighter_bound_wins() {
        let response = Model::new("Resp")
            .field(Field::number("inclusive").ge(2.0).gt(1.0).le(8.0).lt(9.0))
            .field(Field::number("exclusive").ge(1.0).gt(2.0).le(9.0).lt(8.0))
            .field(Field::number("equal").ge(1.0).gt(1.0).le(9.0).lt(9.0));
        let doc = convert(&DataProductDefinition::new(Model::new("Req"), response));
        let properties = &doc["components"]["schemas"]["Resp"]["properties"];

        assert_eq!(
            properties["inclusive"],
            json!({ "type": "number", "minimum": 2, "maximum": 8 })
        );
        assert_eq!(
            properties["exclusive"],
            json!({
                "type": "number",
                "minimum": 2,
                "exclusiveMinimum": true,
                "maximum": 8,
                "exclusiveMaximum": true
            })
        );
        assert_eq!(properties["equal"]["exclusiveMinimum"], true);
        assert_eq!(properties["equal"]["exclusiveMaximum"], true);
    }

    #[test]
    fn test_error_models_match_error_responses() {
        let doc = convert(&sample());
        let schemas = doc["components"]["schemas"].as_object().unwrap();
        let names: Vec<_> = error_models().into_iter().map(|m| m.name).collect();
        assert_eq!(names.len(), 10);
        assert!(names.iter().all(|n| schemas.contains_key(n)));
    }

    #[test]
    fn test_headers_follow_flags() {
        let doc = convert(&sample());
        let params = &doc["paths"]["/Energy/Battery/Sample_v1.0"]["post"]["parameters"];
        assert_eq!(params.as_array().unwrap().len(), 1);
        assert_eq!(params[0]["name"], "authorization");
        assert_eq!(params[0]["required"], false);

        let doc = convert(
            &sample()
                .requires_authorization(true)
                .requires_consent(true)
                .deprecated(true),
        );
        let post = &doc["paths"]["/Energy/Battery/Sample_v1.0"]["post"];
        assert_eq!(post["parameters"][0]["required"], true);
        assert_eq!(post["parameters"][1]["name"], "x-consent-token");
        assert_eq!(post["parameters"][1]["required"], true);
        assert_eq!(post["deprecated"], true);
    }

    #[test]
    fn test_servers_from_options() {
        let options = ConversionOptions {
            server_url: Some(Url::parse("https://gateway.example.com").unwrap()),
        };
        let doc = to_openapi("A/B", &sample(), &options).unwrap();
        assert_eq!(doc["servers"][0]["url"], "https://gateway.example.com/");
    }

    #[test]
    fn test_summary_falls_back_to_path_stem() {
        let def = DataProductDefinition::new(Model::new("Req"), Model::new("Resp"))
            .route_description("Short");
        let doc = convert(&def);
        let post = &doc["paths"]["/Energy/Battery/Sample_v1.0"]["post"];
        assert_eq!(post["summary"], "Sample_v1.0");
        assert_eq!(post["description"], "Short");
        assert!(doc["info"].get("description").is_none());
    }

    #[test]
    fn test_clash_with_error_component_is_rejected() {
        let def = DataProductDefinition::new(
            Model::new("Req"),
            Model::new("Resp").field(Field::object("err", Model::new("NotFound"))),
        );
        let err = to_openapi("X", &def, &ConversionOptions::default()).unwrap_err();
        assert!(matches!(err, Error::OpenApi(_)));
    }

    #[test]
    fn test_generated_document_is_valid_openapi() {
        let doc = convert(&sample().requires_consent(true));
        let spec = verify(&doc).unwrap();
        assert_eq!(spec.info.version, "1.0.0");
        assert_eq!(spec.paths.paths.len(), 1);
    }

    #[test]
    fn test_reader_round_trip() {
        let def = sample();
        let ctx = OpenApiContext::new(convert(&def));
        assert_eq!(ctx.title(), Some("Battery"));
        assert_eq!(ctx.version(), Some("1.0.0"));

        let ops = ctx.operations().unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].request.as_deref(), Some("BatteryRequest"));
        assert_eq!(ops[0].response.as_deref(), Some("BatteryResponse"));
        assert!(!ops[0].deprecated);

        let fields = ctx.component_fields("BatteryResponse").unwrap();
        let expected: Vec<_> = def
            .response
            .fields
            .iter()
            .map(|f| ComponentField {
                name: def.response.published_name(f),
                json_type: f.ty.json_type().to_string(),
                required: f.required,
            })
            .collect();
        assert_eq!(fields, expected);
        assert!(ctx.component_fields("Missing").is_err());
    }

    #[test]
    fn test_parse_content_accepts_yaml() {
        let ctx = OpenApiContext::parse_content("openapi: 3.0.2\ninfo:\n  title: T\n  version: '1'\npaths: {}\n")
            .unwrap();
        assert_eq!(ctx.title(), Some("T"));
        assert!(ctx.operations().unwrap().is_empty());
        assert!(OpenApiContext::parse_content(": : :\n\t- [").is_err());
    }
}
