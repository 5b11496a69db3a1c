use serde_json::json;

use crate::definition::DataProductDefinition;
use crate::schema::{Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        (
            "Health/Diagnoses_v1.0",
            diagnoses()
                .version("1.0.0")
                .title("Persons health diagnoses")
                .description("Diagnoses of a user with ICD10 codes"),
        ),
        (
            "draft/DataProducts/Health/Diagnoses",
            diagnoses()
                .description("Data Product for user's diagnoses with ICD10 codes")
                .route_description("Health diagnoses in ICD codes")
                .summary("Persons Diagnoses"),
        ),
        ("draft/Person/Details", person_details()),
    ]
}

fn diagnoses() -> DataProductDefinition {
    let response = Model::new("HealthDiagnosesResponse").field(
        Field::list("diagnoses", FieldType::String)
            .description("List of users diagnoses in ICD10 code")
            .example(json!(["icd10:J45"])),
    );
    DataProductDefinition::new(Model::new("HealthDiagnosesRequest"), response)
}

fn person_details() -> DataProductDefinition {
    let response = Model::new("PersonDetailsResponse")
        .field(
            Field::string("name")
                .title("Full name")
                .description("Person's name and surname")
                .example("Joshua Gray"),
        )
        .field(
            Field::string("address")
                .title("Address")
                .description("Person's home address")
                .example("6 Raymond river\nRileybury\nCR3 6XA"),
        );

    DataProductDefinition::new(Model::new("PersonDetailsRequest"), response)
        .summary("Person details")
        .requires_authorization(true)
}
