//! Catalog-wide checks over every built-in definition

use std::collections::HashSet;

use dataproduct_core::openapi::{verify, ComponentField, ConversionOptions, OpenApiContext};
use dataproduct_core::schema::{Component, Model};
use dataproduct_core::{
    bootstrap_html, convert_definitions, to_openapi, validate_catalog, Catalog, Config,
    HtmlRenderer,
};
use tempfile::tempdir;

fn expected_fields(model: &Model) -> Vec<ComponentField> {
    model
        .fields
        .iter()
        .map(|f| ComponentField {
            name: model.published_name(f),
            json_type: f.ty.json_type().to_string(),
            required: f.required,
        })
        .collect()
}

#[test]
fn test_builtin_examples_satisfy_constraints() {
    let catalog = Catalog::builtin();
    assert!(!catalog.is_empty());

    let report = validate_catalog(&catalog);
    let rendered: Vec<String> = report
        .iter()
        .flat_map(|(path, violations)| violations.iter().map(move |v| format!("{path}: {v}")))
        .collect();
    assert!(rendered.is_empty(), "violations:\n{}", rendered.join("\n"));
}

#[test]
fn test_published_field_names_are_unique() {
    for entry in &Catalog::builtin() {
        let components = entry.definition.components().expect("no conflicts");
        for component in components {
            if let Component::Model(model) = component {
                let mut seen = HashSet::new();
                for field in &model.fields {
                    assert!(
                        seen.insert(model.published_name(field)),
                        "{}: {} repeats field {}",
                        entry.path,
                        model.name,
                        field.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_definition_round_trips_through_openapi() {
    let options = ConversionOptions::default();
    for entry in &Catalog::builtin() {
        let def = &entry.definition;
        let doc = to_openapi(&entry.path, def, &options)
            .unwrap_or_else(|e| panic!("{}: {}", entry.path, e));
        verify(&doc).unwrap_or_else(|e| panic!("{}: {}", entry.path, e));

        let ctx = OpenApiContext::new(doc);
        assert_eq!(ctx.version(), Some(def.version.as_str()));

        let ops = ctx.operations().expect("operations");
        assert_eq!(ops.len(), 1, "{}", entry.path);
        assert_eq!(ops[0].path, format!("/{}", entry.path));
        assert_eq!(ops[0].deprecated, def.deprecated);
        assert_eq!(ops[0].request.as_deref(), Some(def.request.name.as_str()));
        assert_eq!(ops[0].response.as_deref(), Some(def.response.name.as_str()));

        for model in [&def.request, &def.response] {
            assert_eq!(
                ctx.component_fields(&model.name).expect("component"),
                expected_fields(model),
                "{}: {}",
                entry.path,
                model.name
            );
        }
    }
}

#[test]
fn test_shared_models_are_emitted_once() {
    let catalog = Catalog::builtin();
    let def = catalog
        .get("DigitalProductPassport/LogisticsEmissions_v0.1")
        .expect("builtin");
    let doc = to_openapi(
        "DigitalProductPassport/LogisticsEmissions_v0.1",
        def,
        &ConversionOptions::default(),
    )
    .expect("converts");
    let schemas = doc["components"]["schemas"].as_object().expect("schemas");
    assert!(schemas.contains_key("EmissionsPerTCE"));
    assert!(schemas.contains_key("RoadLeg"));
    assert!(schemas.contains_key("SeaLeg"));
    assert!(schemas.contains_key("FreightType"));
}

#[test]
fn test_headers_match_authorization_flags() {
    let catalog = Catalog::builtin();
    let path = "NSG/Agent/LegalEntity/NonListedCompany/BeneficialOwners_v1.0";
    let doc = to_openapi(path, catalog.get(path).expect("builtin"), &ConversionOptions::default())
        .expect("converts");
    let params = doc["paths"][format!("/{path}")]["post"]["parameters"]
        .as_array()
        .expect("parameters")
        .clone();
    let names: Vec<_> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["authorization", "x-consent-token"]);
    assert!(params.iter().all(|p| p["required"] == true));
}

#[test]
fn test_free_form_time_fields_have_no_format() {
    let catalog = Catalog::builtin();
    for (path, model, property) in [
        ("AirQuality/Current_v1.0", "CurrentAirQualityResponse", "timestamp"),
        ("draft/Company/BasicInfo", "BasicCompanyInfoResponse", "registrationDate"),
    ] {
        let doc = to_openapi(path, catalog.get(path).expect("builtin"), &ConversionOptions::default())
            .expect("converts");
        let schema = &doc["components"]["schemas"][model]["properties"][property];
        assert_eq!(schema["type"], "string", "{path}");
        assert!(schema.get("format").is_none(), "{path}");
    }
}

#[tokio::test]
async fn test_convert_then_bootstrap_writes_one_page_per_document() -> dataproduct_core::Result<()>
{
    let dir = tempdir()?;
    let catalog = Catalog::builtin();
    let config = Config::new(dir.path().to_string_lossy());

    let documents = convert_definitions(&catalog, &config).await?;
    assert_eq!(documents.len(), catalog.len());
    assert!(dir.path().join("AirQuality/Current_v1.0.json").is_file());

    let loaded = OpenApiContext::from_file(dir.path().join("AirQuality/Current_v1.0.json")).await?;
    assert_eq!(loaded.version(), Some("1.0.0"));

    let pages = bootstrap_html(dir.path(), &HtmlRenderer::new(None)?).await?;
    assert_eq!(pages.len(), documents.len());

    let mut expected: Vec<_> = documents.iter().map(|d| d.with_extension("html")).collect();
    expected.sort();
    let mut pages = pages;
    pages.sort();
    assert_eq!(pages, expected);
    Ok(())
}
