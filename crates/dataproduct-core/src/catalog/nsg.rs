//! Nordic Smart Government agent and legal entity definitions

use crate::definition::DataProductDefinition;
use crate::schema::{Enumeration, Field, FieldType, Model};

use super::codes::{ISO_3166_ALPHA_3, ISO_4217_CURRENCIES, NACE_CODES, NORDIC_LEGAL_FORMS};
use super::passport::EMAIL;

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        ("draft/NSG/Agent/BasicInformation", basic_information()),
        (
            "draft/NSG/Agent/LegalEntity/NonListedCompany/SignatoryRights",
            signatory_rights(),
        ),
        (
            "draft/NSG/Agent/LegalEntity/NonListedCompany/Establishment/Write",
            establishment(),
        ),
    ]
}

fn country_code() -> Enumeration {
    Enumeration::new("ISO_3166_1_Alpha_3", ISO_3166_ALPHA_3)
}

fn currency_code() -> Enumeration {
    Enumeration::new("ISO_4217_CurrencyCode", ISO_4217_CURRENCIES)
}

/// Bounded optional text, as every address component is
fn address_part(name: &str, title: &str, max_length: usize, registered: bool) -> Field {
    let field = Field::string(name)
        .optional()
        .title(title)
        .max_length(max_length);
    if registered {
        field.min_length(1)
    } else {
        field
    }
}

/// INSPIRE address components. `registered` selects the trade register
/// flavour, which forbids empty strings and carries an address id.
fn address_fields(model: Model, registered: bool) -> Model {
    let (locator_name_description, locator_name_example) = if registered {
        (
            "Proper noun(s) applied to the real world entity identified by the locator. The \
             locator name could be the name of the property or complex, of the building or \
             part of the building, or it could be the name of a room inside a building. The \
             key difference between a locator and a locator name is that the latter is a \
             proper name and is unlikely to include digits.",
            "Shumann, Berlaymont (meeting room name)",
        )
    } else {
        (
            "Proper noun(s) applied to the real world entity identified by the locator. The \
             locator name could be the name of the property or complex, of the building or \
             part of the building, or it could be the name of a room inside a building. The \
             key difference between a locator designator and a locator name is that the \
             latter is a proper name and is unlikely to include digits.",
            "Shumann, Berlaymont building",
        )
    };

    let model = model
        .field(
            address_part("full_address", "Full address", 250, registered)
                .description(
                    "The complete address written as a string. Use of this property is \
                     recommended as it will not suffer any misunderstandings that might arise \
                     through the breaking up of an address into its component parts.",
                )
                .example("Tietotie 4 A 7, 00100 Helsinki, Finland"),
        )
        .field(
            address_part("thoroughfare", "Thoroughfare", 40, registered)
                .description(
                    "The name of a passage or way through from one location to another. A \
                     thoroughfare is usually a street, but it might be a waterway or some \
                     other feature.",
                )
                .example("Avenue des Champs-Élysées"),
        )
        .field(
            address_part("locator_designator", "Locator designator", 10, registered)
                .description(
                    "A number or sequence of characters that uniquely identifies the locator \
                     within the relevant scope. In simpler terms, this is the building number, \
                     apartment number, etc.",
                )
                .example("Flat 3, 17 or 3 A 4"),
        )
        .field(
            address_part("locator_name", "Locator name", 40, registered)
                .description(locator_name_description)
                .example(locator_name_example),
        )
        .field(
            address_part("address_area", "Address area", 40, registered)
                .description(
                    "The name of a geographic area that groups Addresses. This would \
                     typically be part of a city, a neighbourhood or village. Address area is \
                     not an administrative unit.",
                )
                .example("Montmartre (in Paris)"),
        )
        .field(
            address_part("post_code", "Post code", 10, registered)
                .description(
                    "The code created and maintained for postal purposes to identify a \
                     subdivision of addresses and postal delivery points.",
                )
                .example("75000"),
        )
        .field(
            address_part("post_name", "Post name", 40, registered)
                .description(
                    "A name created and maintained for postal purposes to identify a \
                     subdivision of addresses and postal delivery points. Usually a city.",
                )
                .example("Paris"),
        )
        .field(
            address_part("po_box", "PO box", 10, registered)
                .description(
                    "A location designator for a postal delivery point at a post office, \
                     usually a number.",
                )
                .example("9383"),
        )
        .field(
            Field::enumeration("admin_unit_level_1", country_code())
                .optional()
                .title("Admin unit level 1")
                .description(
                    "The name of the uppermost level of the address, almost always a country. \
                     ISO 3166 three character (Alpha 3) format.",
                )
                .example("USA"),
        )
        .field(
            address_part("admin_unit_level_2", "Admin unit level 2", 40, registered)
                .description(
                    "The name of a secondary level/region of the address, usually a county, \
                     state or other such area that typically encompasses several localities. \
                     Values could be a region or province, more granular than level 1.",
                )
                .example(if registered { "Uusimaa" } else { "Lapland" }),
        );

    if !registered {
        return model;
    }
    model.field(
        address_part("address_id", "Address id", 40, registered)
            .description(
                "A globally unique identifier for each instance of an Address. The concept of \
                 adding a globally unique identifier for each instance of an address is a \
                 crucial part of INSPIRE. A number of EU countries have already \
                 implemented an ID (a UUID) in their Address Register, among them Denmark.",
            )
            .example("123e4567-e89b-12d3-a456-42661417400"),
    )
}

/// Name, birth date and nationality of a person acting for a company
fn person_fields(model: Model, middle_names_title: &str) -> Model {
    model
        .field(
            Field::string("given_name")
                .title("Given name")
                .description("The first name that the person is being called by")
                .example("Mary")
                .max_length(250),
        )
        .field(
            Field::string("middle_names")
                .title(middle_names_title)
                .description("All the middle names of the person")
                .example("Juliet Olive")
                .max_length(250),
        )
        .field(
            Field::string("last_name")
                .title("Last name")
                .description("The person's current family name")
                .example("Deo")
                .max_length(250),
        )
        .field(
            Field::date("date_of_birth")
                .title("Date of birth")
                .description("The birth day of the person")
                .example("1976-04-16"),
        )
        .field(
            Field::enumeration("nationality", country_code())
                .title("Nationality")
                .description("The nationality of the person")
                .example("USA"),
        )
}

fn basic_information() -> DataProductDefinition {
    let request = Model::new("BasicInformationRequest").field(
        Field::string("national_identifier")
            .title("National Identifier")
            .description("National identifier for a legal entity")
            .example("2464491-9"),
    );

    let legal_status = Enumeration::new(
        "LegalStatus",
        ["NORMAL", "LIQUIDATION", "RESTRUCTURING", "BANKRUPTCY"],
    );

    let response = Model::new("BasicInformationResponse")
        .field(
            Field::string("name")
                .title("Name")
                .description("The name of the legal entity")
                .example("Oy Example Ab"),
        )
        .field(
            Field::enumeration(
                "legal_form",
                Enumeration::new("NordicLegalForm", NORDIC_LEGAL_FORMS),
            )
            .title("Legal form")
            .description(
                "The [Nordic Legal Form code](https://koodistot.suomi.fi/codescheme;\
                 registryCode=verotus;schemeCode=LegalForm2) for the company.",
            )
            .example("FI_OY"),
        )
        .field(
            Field::enumeration("legal_status", legal_status)
                .title("Legal status")
                .description("Status of the legal entity")
                .example("NORMAL"),
        )
        .field(
            Field::date("registration_date")
                .title("Registration date")
                .description(
                    "Official registration date of the legal entity in the national trade \
                     registry",
                ),
        )
        .field(Field::object(
            "registered_address",
            address_fields(Model::new("RegisteredAddress"), true),
        ));

    DataProductDefinition::new(request, response)
        .version("0.0.1")
        .deprecated(true)
        .title("NSG Agent information")
        .description(
            "In the Nordic Smart Government information exchange context the agent represents \
             both registered organizations (\"companies\") and persons who are doing business \
             without being registered organizations, usually as sole traders (sole \
             proprietors). This data product definition returns basic information content for \
             any agent.",
        )
}

fn signatory_rights() -> DataProductDefinition {
    let role = Enumeration::new(
        "Role",
        [
            "director",
            "deputy director",
            "chairperson",
            "board member",
            "deputy board member",
            "other",
        ],
    );

    let signatory = Model::new("SignatoryRights")
        .field(
            Field::enumeration("role", role)
                .title("Role")
                .example("chairperson")
                .description("The role of the person that has a signing right in the company"),
        )
        .field(
            Field::string("personal_id")
                .optional()
                .title("Personal ID")
                .description("The ID of a person if exists, e.g. social security number or similar")
                .example("1129955131")
                .max_length(40),
        );
    let signatory = address_fields(person_fields(signatory, "Middle names"), false);

    let request = Model::new("SignatoryRightsRequest").field(
        Field::string("national_identifier")
            .title("National identifier")
            .description(
                "The national identifier of the non-listed company issued by the trade register",
            )
            .example("FIN: 2464491-9 / NOR: 923609016")
            .max_length(40),
    );

    let response = Model::new("SignatoryRightsResponse").field(
        Field::list("signing_rights", FieldType::Object(signatory))
            .title("Signing rights")
            .description("The list of representatives that have signing rights for the company"),
    );

    DataProductDefinition::new(request, response)
        .description("The list of representation rights of a legal entity")
        .summary("Non-listed Company Signatory Rights")
        .requires_authorization(true)
        .requires_consent(true)
}

fn establishment() -> DataProductDefinition {
    let registrant = Model::new("Registrant")
        .field(
            Field::string("given_name")
                .title("Given name")
                .description("The first name that the person is being called by")
                .max_length(250)
                .example("John"),
        )
        .field(
            Field::string("last_name")
                .title("Last name")
                .description("The person's current family name")
                .max_length(250)
                .example("Doe"),
        )
        .field(
            Field::string("email")
                .pattern(EMAIL)
                .title("Email")
                .description("The person's contact email address")
                .example("john.doe@test.fi"),
        )
        .field(
            Field::string("phone_number")
                .title("Phone number")
                .description("The person's phone number in the international format")
                .example("+358501234567")
                .max_length(250),
        );

    let company_details = Model::new("CompanyDetails")
        .field(
            Field::string("name")
                .title("Name")
                .description("The desired name to be registered for the company")
                .max_length(250)
                .example("Digital company X"),
        )
        .field(
            Field::string("alternative_name")
                .optional()
                .title("Alternative name")
                .description(
                    "The second alternative for the desired name to be registered for the \
                     company if the primary name is not available",
                )
                .max_length(250)
                .example("Digital company Y"),
        )
        .field(
            Field::date("founding_date")
                .title("Founding date")
                .description("The date of memorandum of association")
                .example("2022-01-01"),
        )
        .field(
            Field::enumeration("industry_sector", Enumeration::new("IndustrySector", NACE_CODES))
                .title("Industry sector")
                .description(
                    "The industry fields where the company will run its business. The codes \
                     are based on the Statistical classification of economic activities in the \
                     European Community, abbreviated as NACE.",
                )
                .example("62.01"),
        )
        .field(
            Field::number("share_capital")
                .title("Share capital")
                .description("The total value of the issued shares of the company")
                .example(1000.0),
        )
        .field(
            Field::enumeration("capital_currency", currency_code())
                .title("Capital currency")
                .description("The currency used for the share capital in ISO 4217 format")
                .example("EUR"),
        )
        .field(
            Field::number("settlement_deposit")
                .optional()
                .title("Settlement deposit")
                .description("The amount of the deposit paid during the establishment of a company")
                .example(1000.0),
        )
        .field(
            Field::enumeration("deposit_currency", currency_code())
                .optional()
                .title("Deposit currency")
                .description(
                    "The currency used for the paying the settlement deposit in ISO 4217 format",
                )
                .example("EUR"),
        )
        .field(
            Field::date("settlement_date")
                .optional()
                .title("Settlement date")
                .description(
                    "The date on which the share deposit has been settled and available as full",
                )
                .example("2022-02-01"),
        )
        .field(
            Field::enumeration("country_of_residence", country_code())
                .optional()
                .title("Country of residence")
                .description(
                    "The company's current country of the residence in the three character \
                     (Alpha-3) format if it already exists abroad",
                )
                .example("USA"),
        );

    let share_series = Model::new("ShareSeries")
        .field(
            Field::string("share_series_class")
                .title("Share series class")
                .description("The type of the share series of a company")
                .example("A")
                .max_length(5),
        )
        .field(
            Field::integer("number_of_shares")
                .title("Number of shares")
                .description("The total number of the shares in the share series class")
                .example(100),
        )
        .field(
            Field::number("share_value")
                .title("Share value")
                .description("The nominal value of a share of this class")
                .example(10.0),
        )
        .field(
            Field::enumeration("share_value_currency", currency_code())
                .optional()
                .title("Share value currency")
                .description("The currency used for the share value in ISO 4217 format")
                .example("EUR"),
        );

    let managing_director = person_fields(
        Model::new("ManagingDirector").field(
            Field::enumeration(
                "role",
                Enumeration::new("ManagingDirectorRole", ["director", "deputy director"]),
            )
            .title("Role")
            .description("The role of the director")
            .example("director"),
        ),
        "Middle name",
    );

    let board_member = person_fields(
        Model::new("BoardMember").field(
            Field::enumeration(
                "role",
                Enumeration::new("BoardMemberRole", ["chairperson", "member", "deputy member"]),
            )
            .title("Role")
            .description("The role of the person in the board")
            .example("member"),
        ),
        "Middle names",
    );

    let auditor = Model::new("AuditorDetails")
        .field(
            Field::string("company_name")
                .optional()
                .title("Company name")
                .description("The name of the auditor company if it exists")
                .example("Auditor company X")
                .max_length(250),
        )
        .field(
            Field::string("national_identifier")
                .optional()
                .title("National identifier")
                .description(
                    "The national identifier of the auditor company issued by the trade register",
                )
                .example("2464491-9")
                .max_length(40),
        )
        .field(
            Field::string("given_name")
                .optional()
                .title("Given name")
                .description("The first name that the person is being called by")
                .example("Jane")
                .max_length(250),
        )
        .field(
            Field::string("last_name")
                .optional()
                .title("Last name")
                .description("The person's current family name")
                .example("Doe")
                .max_length(250),
        );

    let request = Model::new("EstablishmentRequest")
        .field(
            Field::object("registrant", registrant)
                .title("Registrant")
                .description("The personal details of the person registering the company"),
        )
        .field(
            Field::object("company_details", company_details)
                .title("Company details")
                .description("The details of the company being established"),
        )
        .field(
            Field::list("share_series", FieldType::Object(share_series))
                .title("Share series")
                .description("The details of the share series of the company"),
        )
        .field(
            Field::object(
                "company_address",
                address_fields(Model::new("CompanyAddress"), false),
            )
            .title("Company address")
            .description("The official address of the company"),
        )
        .field(
            Field::list("managing_directors", FieldType::Object(managing_director))
                .title("Managing directors"),
        )
        .field(
            Field::list("board_members", FieldType::Object(board_member)).title("Board members"),
        )
        .field(
            Field::object("auditor_details", auditor)
                .title("Auditor details")
                .description("The details of the company and person auditing the company"),
        );

    // The registry echoes the submitted establishment data back
    let response = request.clone();

    DataProductDefinition::new(request, response)
        .title("Establish a non-listed company")
        .description("Create the initial set of data to establish a non-listed company")
        .requires_authorization(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_address_is_stricter() {
        let registered = address_fields(Model::new("RegisteredAddress"), true);
        let plain = address_fields(Model::new("CompanyAddress"), false);
        assert_eq!(registered.fields.len(), plain.fields.len() + 1);
        assert_eq!(registered.fields[0].constraints.min_length, Some(1));
        assert_eq!(plain.fields[0].constraints.min_length, None);
        assert!(registered.fields.iter().all(|f| !f.required));
        assert_eq!(
            registered.published_name(&registered.fields[8]),
            "adminUnitLevel1"
        );
    }

    #[test]
    fn test_establishment_echoes_request() {
        let def = establishment();
        assert_eq!(def.request, def.response);
        let components = def.components().unwrap();
        let names: Vec<_> = components.iter().map(|c| c.name()).collect();
        assert_eq!(
            names.iter().filter(|n| **n == "ISO_3166_1_Alpha_3").count(),
            1
        );
        assert!(names.contains(&"IndustrySector"));
        assert!(names.contains(&"ISO_4217_CurrencyCode"));
    }
}
