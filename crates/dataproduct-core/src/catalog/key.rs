use crate::definition::DataProductDefinition;
use crate::schema::{Field, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        (
            "draft/Key/CreateAssignment",
            assignment("CreateAssignment")
                .description("Create key assignment")
                .route_description("Create assignment")
                .summary("Create key assignment"),
        ),
        (
            "draft/Key/DeleteAssignment",
            assignment("DeleteAssignment")
                .description("Delete key assignment")
                .route_description("Delete assignment")
                .summary("Delete key assignment"),
        ),
        ("draft/Key/LockAssignmentExists", lock_assignment_exists()),
    ]
}

fn key_id() -> Field {
    Field::string("key_id")
        .title("Key ID")
        .description("UID of a key as a hex encoded string without delimiters")
        .example("a1b2c3d4e5f6890")
        .min_length(1)
        .pattern(r"^[0-9a-f]+$")
}

fn lock_id() -> Field {
    Field::string("lock_id")
        .title("Lock ID")
        .description("Vendor specific ID for a lock")
        .example("12345678")
        .min_length(1)
}

fn shared_secret() -> Field {
    Field::string("shared_secret")
        .title("Shared Secret")
        .description("Shared secret between the productizer and the system using it")
}

/// The request repeats the response and adds the shared secret
fn assignment(prefix: &str) -> DataProductDefinition {
    let response = Model::new(format!("{prefix}Response"))
        .field(key_id())
        .field(lock_id());
    let request = response
        .extend(format!("{prefix}Request"))
        .field(shared_secret());
    DataProductDefinition::new(request, response)
}

fn lock_assignment_exists() -> DataProductDefinition {
    let request = Model::new("LockAssignmentExistsRequest")
        .field(key_id())
        .field(lock_id())
        .field(shared_secret());

    let response = Model::new("LockAssignmentExistsResponse").field(
        Field::boolean("exists")
            .title("Exists")
            .description("Whether a matching assignment exists or not")
            .example(true),
    );

    DataProductDefinition::new(request, response)
        .version("0.0.1")
        .deprecated(true)
        .title("Check if lock assignment exists")
        .description("Check if a key has access to a specific lock")
}
