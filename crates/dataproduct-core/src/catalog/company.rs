use crate::definition::DataProductDefinition;
use crate::schema::{Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        (
            "draft/Company/BasicInfo",
            basic_info()
                .title("Basic information about a company")
                .description(
                    "Legal information about a company such as company registration date",
                ),
        ),
        (
            "draft/DataProducts/Company/BasicInfo",
            basic_info()
                .description("Data Product for basic company info")
                .route_description("Information about the company")
                .summary("Basic Company Info"),
        ),
        (
            "draft/Company/Shareholders",
            shareholders()
                .version("0.0.1")
                .deprecated(true)
                .title("List of the shareholders of a company")
                .description(
                    "Information about the shareholders of a company such as owners and \
                     shares quantity.",
                ),
        ),
        (
            "draft/DataProducts/Company/Shareholders",
            shareholders()
                .description("Data Product for Shareholders info")
                .route_description("Information about the shareholders of the company")
                .summary("Shareholders Info"),
        ),
        (
            "draft/Company/Recommendation",
            recommendation()
                .version("0.0.1")
                .deprecated(true)
                .title("Company recommendations based on keywords")
                .description(
                    "Recommendation of companies based on provided keywords. Each result has \
                     a score.",
                ),
        ),
        (
            "draft/DataProducts/Company/Recommendation",
            recommendation()
                .route_description("Data Product for company recommendations score")
                .description("Data Product for company recommendations score")
                .summary("Company Recommendations Scores"),
        ),
        (
            "NSG/Agent/LegalEntity/NonListedCompany/BeneficialOwners_v1.0",
            beneficial_owners(),
        ),
    ]
}

fn company_id(description: &str) -> Field {
    Field::string("company_id")
        .title("Company ID")
        .description(description)
        .example("2464491-9")
}

fn basic_info() -> DataProductDefinition {
    let request =
        Model::new("BasicCompanyInfoRequest").field(company_id("The ID of the company"));

    let response = Model::new("BasicCompanyInfoResponse")
        .field(
            Field::string("name")
                .title("Name of the company")
                .example("Digital Living International Oy"),
        )
        .field(
            Field::string("company_id")
                .title("ID of the company")
                .example("2464491-9"),
        )
        .field(
            Field::string("company_form")
                .title("The company form of the company")
                .example("LLC"),
        )
        .field(
            Field::string("registration_date")
                .title("Date of registration for the company")
                .example("2012-02-23"),
        );

    DataProductDefinition::new(request, response)
}

fn shareholders() -> DataProductDefinition {
    let share_series = Model::new("ShareSeries")
        .field(
            Field::string("series_name")
                .title("Series Name")
                .description("Classification of the share")
                .example("A"),
        )
        .field(
            Field::integer("votes_per_share")
                .title("Votes per share")
                .description("Number of votes per share in the share series")
                .example(1),
        )
        .field(
            Field::integer("total_shares")
                .title("Total Shares")
                .description("Total number of shares in the share series")
                .example(1000),
        );

    let ownerships = Model::new("Ownerships")
        .field(
            Field::string("series_name")
                .title("Series Name")
                .description("Name of the share series")
                .example("A"),
        )
        .field(
            Field::integer("quantity")
                .title("Number of Shares")
                .description("Number of shares held by the owner")
                .example(100),
        );

    let owners = Model::new("Owners")
        .field(
            Field::string("name")
                .title("Name of the Shareholder")
                .description("Name of the shareholder")
                .example("Matti Meikäläinen | Oy Company Ltd"),
        )
        .field(
            Field::list("ownerships", FieldType::Object(ownerships))
                .title("Ownerships")
                .description("List of Ownerships"),
        );

    let request = Model::new("ShareholdersInfoRequest").field(company_id(
        "The ID of the company, only supports Finnish business ID's",
    ));

    let response = Model::new("ShareholdersInfoResponse")
        .field(
            Field::list("share_series", FieldType::Object(share_series))
                .title("Share series")
                .description("List of share series"),
        )
        .field(
            Field::list("owners", FieldType::Object(owners))
                .title("Owners")
                .description("List of owners"),
        );

    DataProductDefinition::new(request, response)
}

fn recommendation() -> DataProductDefinition {
    let request = Model::new("RecommendationRequest").field(
        Field::string("keywords")
            .title("Keywords")
            .description("Keyword data to base recommendations on")
            .example("Looking for data product companies to invest on"),
    );

    let result = Model::new("Recommendation")
        .field(
            Field::integer("score")
                .description("Recommendation score of the company")
                .example(231),
        )
        .field(company_id("Company ID"))
        .field(
            Field::string("company_name")
                .title("Company name")
                .description("Company name")
                .example("Digital Living Oy"),
        );

    let response = Model::new("RecommendationResponse").field(
        Field::list("results", FieldType::Object(result))
            .title("Recommendation results")
            .description("List of recommendations"),
    );

    DataProductDefinition::new(request, response)
}

fn beneficial_owners() -> DataProductDefinition {
    let share_ownership = Model::new("ShareOwnership")
        .field(
            Field::string("share_series_class")
                .title("Share series class")
                .description("The class of the share series that the shareholder owns.")
                .example("B")
                .max_length(5),
        )
        .field(
            Field::integer("quantity")
                .title("Quantity")
                .description("The number of shares that the shareholder owns a share series")
                .example(20),
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
                .example(1000),
        )
        .field(
            Field::integer("votes_per_share")
                .title("Votes per share")
                .description("The number of votes per share in the share series")
                .example(1),
        );

    let shareholder = Model::new("Shareholder")
        .field(
            Field::string("name")
                .title("Name")
                .description("The name of a shareholder of the company")
                .example("Lars Lindberg | Company Ltd")
                .max_length(250),
        )
        .field(
            Field::list("share_ownership", FieldType::Object(share_ownership))
                .title("Share ownership")
                .description("The list of ownerships that the shareholder has in the company"),
        );

    let request = Model::new("BeneficialOwnersRequest").field(
        Field::string("national_identifier")
            .title("National identifier")
            .description(
                "The national identifier of the non-listed company issued by the trade \
                 register in any Nordic country.",
            )
            .example("FIN: 2464491-9 / SWE: 5560125791")
            .max_length(40),
    );

    let response = Model::new("BeneficialOwnersResponse")
        .field(
            Field::list("share_series", FieldType::Object(share_series))
                .title("Share series")
                .description("The details of the share series classes of the company"),
        )
        .field(
            Field::list("shareholders", FieldType::Object(shareholder))
                .title("Shareholder")
                .description("The list of beneficial owners of the company"),
        );

    DataProductDefinition::new(request, response)
        .version("1.0.0")
        .title("Beneficial owners of a non-listed company")
        .description(
            "The list of beneficial owners of a non-listed company. The shareholders \
             exceeding 25 % ownership.",
        )
        .requires_authorization(true)
        .requires_consent(true)
}
