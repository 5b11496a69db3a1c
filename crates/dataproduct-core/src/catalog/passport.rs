//! Digital product passport definitions

use serde_json::json;

use crate::definition::DataProductDefinition;
use crate::schema::{Enumeration, Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        ("DigitalProductPassport/MetalArtifact/DataSheet_v0.1", metal_artifact()),
        ("DigitalProductPassport/MetaArtifact/DataSheet_v0.1", meta_artifact()),
        ("DigitalProductPassport/FoodArtifact/DataSheet_v0.1", food_artifact()),
        (
            "DigitalProductPassport/MobileWorkMachine/EnvironmentalFootprint_v0.1",
            work_machine_footprint(false, "https://example.com/CarbonFootprint", "bev-drill-1234a")
                .title("Mobile Work Machine Environmental Footprint"),
        ),
        (
            "DigitalProductPassport/MovableWorkMachine/EnvironmentalFootprint_v0.1",
            work_machine_footprint(
                true,
                "https://company/carbonFootprintAnalysis/z37-310-76",
                "dl422ie",
            )
            .title("Movable Work Machine Environmental Footprint"),
        ),
        ("DigitalProductPassport/Battery/CarbonFootprint_v0.1", battery_carbon_footprint()),
        ("DigitalProductPassport/Battery/HealthData_v0.1", battery_health_data()),
        (
            "DigitalProductPassport/Battery/ManufacturingDataSheet_v0.1",
            battery_manufacturing_data_sheet(),
        ),
        (
            "DigitalProductPassport/MobileWorkMachine/Drill/ManufacturingDataSheet_v0.1",
            drill_manufacturing_data_sheet(),
        ),
    ]
}

const HTTPS_URL: &str = r"^https://";
pub(super) const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Adds the `product` / `id` pair used to address a single product instance
pub(super) fn product_identification(model: Model, product: &str, id: &str) -> Model {
    model
        .field(
            Field::string("product")
                .title("Product code")
                .description("The product code used for identifying the product type")
                .example(product),
        )
        .field(
            Field::string("id")
                .title("Identifier")
                .description("Unique identifier of the product")
                .example(id),
        )
}

/// Length-limited variant of [`product_identification`]
fn bounded_product_identification(model: Model, product: &str, id: &str) -> Model {
    model
        .field(
            Field::string("product")
                .max_length(150)
                .title("Product")
                .description("The product code used for identifying the product type")
                .example(product),
        )
        .field(
            Field::string("id")
                .max_length(40)
                .title("Id")
                .description("The unique identifier of the product")
                .example(id),
        )
}

fn https_url(name: &str) -> Field {
    Field::string(name).pattern(HTTPS_URL).max_length(2083)
}

/// Manufacturer headquarters block; `examples` are name, street, postal
/// code, city, country, website and e-mail in that order.
fn manufacturer_information(examples: [&str; 7]) -> Model {
    let [name, street, postal_code, city, country, website, email] = examples;
    Model::new("ManufacturerInformation")
        .field(
            Field::string("name")
                .max_length(250)
                .title("Name")
                .description("The registered trade name of the battery manufacturer company")
                .example(name),
        )
        .field(
            Field::string("street_name")
                .title("Street Name")
                .max_length(40)
                .description("The street address of the manufacturer's headquarters")
                .example(street),
        )
        .field(
            Field::string("postal_code")
                .title("Postal Code")
                .max_length(10)
                .description("The postal code of the manufacturer's headquarters")
                .example(postal_code),
        )
        .field(
            Field::string("city")
                .title("City")
                .max_length(40)
                .description("The city of the manufacturer's headquarters")
                .example(city),
        )
        .field(
            Field::string("country")
                .title("Country")
                .max_length(3)
                .description(
                    "The country code of the manufacturer's headquarters location in Alpha-3 \
                     format",
                )
                .example(country),
        )
        .field(
            https_url("website")
                .optional()
                .title("Website")
                .description("The website of the battery manufacturer")
                .example(website),
        )
        .field(
            Field::string("email")
                .optional()
                .pattern(EMAIL)
                .title("Email")
                .description("The email address of the battery manufacturer")
                .example(email),
        )
}

fn measures() -> Model {
    let dimension = |name: &str, title: &str, example: i64| {
        Field::integer(name)
            .optional()
            .title(title)
            .description(format!(
                "The {} of the product measured in centimeters",
                name
            ))
            .example(example)
    };
    Model::new("Measures")
        .field(dimension("width", "Width", 1500))
        .field(dimension("length", "Length", 4000))
        .field(dimension("height", "Height", 0))
}

fn metal_artifact() -> DataProductDefinition {
    let en_standard = Model::new("EnStandardCertification").field(
        Field::string("en_standard_code")
            .optional()
            .title("EN Standard Code")
            .max_length(20)
            .description(
                "The identification code of the EN standard that the product is compliant with",
            )
            .example("EN 10002-1, EN 10002-5"),
    );

    let request = Model::new("MetalArtifactDataSheetRequest")
        .field(
            Field::string("product")
                .title("Product identifier")
                .description("Technical product identifier used by the manufacturer")
                .example("battery-100wh-s"),
        )
        .field(
            Field::string("id")
                .title("Identifier")
                .description("Unique identifier for the product")
                .example("177389-09633"),
        );

    let response = Model::new("MetalArtifactDataSheetResponse")
        .field(
            Field::string("product_name")
                .title("Product Name")
                .max_length(250)
                .description("The commercial name of the metal product")
                .example("HOT-DIP ZINC-COATED STEEL STRIP, HIGH STRENGTH STEEL FOR COLD FORMING"),
        )
        .field(
            Field::string("product_type")
                .title("Product Type")
                .max_length(250)
                .description("The type of the metal product")
                .example("Steel roll"),
        )
        .field(
            Field::object("measures", measures())
                .optional()
                .title("Measures")
                .description("The dimensional measures of the metal product"),
        )
        .field(
            Field::number("net_weight")
                .title("Net Weight")
                .description("Net weight of the steel roll in kilograms")
                .example(11720.0),
        )
        .field(
            Field::list("en_standard_certification", FieldType::Object(en_standard))
                .title("EN Standard Certification")
                .description("The list of EN standards"),
        )
        .field(
            Field::string("treatment_type")
                .optional()
                .title("Treatment Type")
                .max_length(20)
                .description("The type of re-treatment for the steel roll")
                .example("Prelube oil"),
        );

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Data Sheet For Metal Artifacts")
        .description("Returns the basic product information of a metal product")
}

fn food_artifact() -> DataProductDefinition {
    let fat_content = Model::new("FatContentType")
        .field(
            Field::number("fats")
                .title("Fats")
                .description("The amount of fat per 100g measured in grams")
                .example(6),
        )
        .field(
            Field::number("saturated_fats")
                .title("Saturated Fats")
                .description("The amount of saturated fat per 100g measured in grams")
                .example(0.4),
        );

    let energy_content = Model::new("EnergyContentType")
        .field(
            Field::integer("energy")
                .title("Energy")
                .description("The amount of energy per 100g measured in kilojoules")
                .example(750),
        )
        .field(
            Field::integer("calories")
                .title("Calories")
                .description("The amount of calories per 100g measured in kilocalories")
                .example(180),
        );

    let request = product_identification(
        Model::new("FoodArtifactDataSheetRequest"),
        "french-fries-500g",
        "550e8400-e29b-41d4-a716-446655440000",
    );

    let per_100g = |name: &str, title: &str, nutrient: &str, example: f64| {
        Field::number(name)
            .title(title)
            .description(format!(
                "The amount of {nutrient} per 100g measured in grams"
            ))
            .example(example)
    };

    let response = Model::new("FoodArtifactDataSheetResponse")
        .field(
            Field::object("energy_content", energy_content)
                .title("Energy Content")
                .description("The details of the energy content of the food artifact"),
        )
        .field(
            Field::object("fat_content", fat_content)
                .title("Fat Content")
                .description("The details of the fat content of the food artifact"),
        )
        .field(per_100g("carbon_hydrates", "Carbon Hydrates", "carbon hydrates", 28.0))
        .field(per_100g("sugar", "Sugar", "sugar", 0.5))
        .field(per_100g("protein", "Protein", "protein", 3.0))
        .field(per_100g("salt", "Salt", "salt", 0.01));

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Food Artifact Nutritional Values")
        .description("Returns the nutritional values of a food product")
}

/// `required_footprints` marks both footprint figures as mandatory, as the
/// movable work machine revision does.
fn work_machine_footprint(
    required_footprints: bool,
    reference_example: &str,
    product_example: &str,
) -> DataProductDefinition {
    let footprint = |name: &str, title: &str, phase: &str, example: f64| {
        let field = Field::number(name)
            .title(title)
            .description(format!(
                "The carbon footprint of the {phase} of the machine calculated as kg of CO2e \
                 per one kWh using preferably PEF and PEFCR methods"
            ))
            .example(example);
        if required_footprints {
            field
        } else {
            field.optional()
        }
    };

    let carbon_footprint = Model::new("CarbonFootprint")
        .field(footprint(
            "pre_production_footprint",
            "Pre Production Footprint",
            "pre-manufacture phase",
            2345.7,
        ))
        .field(footprint(
            "main_production_footprint",
            "Main Production Footprint",
            "main production phase",
            3504.4,
        ))
        .field(
            https_url("reference_material")
                .optional()
                .title("Reference Material")
                .description(
                    "The link giving access to a public version of the study supporting the \
                     carbon footprint values",
                )
                .example(reference_example),
        );

    let material_waste = Model::new("MaterialWaste")
        .field(
            Field::number("amount")
                .optional()
                .title("Amount")
                .description(
                    "The amount of material waste in kilograms (kg) generated during the \
                     machine production",
                )
                .example(500.0),
        )
        .field(
            https_url("reference_material")
                .optional()
                .title("Reference Material")
                .description(
                    "The link giving access to a public version of the study supporting the \
                     material waste values",
                )
                .example(reference_example),
        );

    let response = Model::new("DataSheetResponse")
        .field(
            Field::object("carbon_footprint", carbon_footprint)
                .title("Carbon Footprint")
                .description(
                    "The details of the carbon footprint for the machine production phases",
                ),
        )
        .field(
            Field::object("material_waste", material_waste)
                .optional()
                .title("Material Waste")
                .description("The details of the material waste generated during the production"),
        );

    let request = bounded_product_identification(
        Model::new("DataSheetRequest"),
        product_example,
        "71b51878-8a00-11ee-b9d1-0242ac120002",
    );

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .description("Carbon Footprint of a Mobile Work Machine")
}

fn battery_passport_request(name: &str) -> Model {
    bounded_product_identification(
        Model::new(name),
        "sodium-ion-75kWh",
        "660e8400-e29b-41d4-a716-446655440000",
    )
}

fn battery_carbon_footprint() -> DataProductDefinition {
    let location = Model::new("ManufacturingLocation")
        .field(
            Field::string("country")
                .title("Country")
                .max_length(3)
                .description(
                    "The country code of the battery manufacturing location in Alpha-3 format",
                )
                .example("CHE"),
        )
        .field(
            Field::string("city")
                .optional()
                .title("City")
                .max_length(40)
                .description("The city of the battery manufacturing location")
                .example("Stabio"),
        );

    let manufacturer = manufacturer_information([
        "FZSonic",
        "Viale Europa 81",
        "VI 36075",
        "Montecchio Maggiore",
        "ITA",
        "https://www.fzsonick.com",
        "info@fzsonick.com",
    ]);

    let carbon_footprint = Model::new("CarbonFootprint")
        .field(
            Field::number("pre_production_footprint")
                .title("Pre Production Footprint")
                .description(
                    "The carbon footprint of the raw material acquisition and pre-processing \
                     phase of the battery calculated as kilograms (kg) of CO2e per one \
                     kilowatt-hour (kWh) using preferably PEF and PEFCR methods",
                )
                .example(2345.7),
        )
        .field(
            Field::number("main_production_footprint")
                .title("Main Production Footprint")
                .description(
                    "The carbon footprint of the battery main production phase calculated as \
                     kilograms (kg) of CO2e per one kilowatt-hour (kWh) using preferably PEF \
                     and PEFCR methods",
                )
                .example(3504.4),
        )
        .field(
            https_url("reference_material")
                .title("Reference Material")
                .description(
                    "The web link giving access to a public version of the study supporting \
                     the carbon footprint values",
                )
                .example("https://company/carbonFootprintAnalysis/z37-310-76"),
        );

    let response = Model::new("CarbonFootprintResponse")
        .field(
            Field::object("manufacturer_information", manufacturer)
                .title("Manufacturer Information")
                .description("The details of the battery manufacturer"),
        )
        .field(
            Field::string("battery_model")
                .max_length(40)
                .title("Battery Model")
                .description("The model of the battery")
                .example("Z37-310-76"),
        )
        .field(
            https_url("conformity_declaration")
                .title("Conformity Declaration")
                .description("The link to the EU declaration of conformity documentation")
                .example("https://company/EUdeclaration/z37-310-76"),
        )
        .field(
            Field::object("manufacturing_location", location)
                .title("Manufacturing Location")
                .description("The details of the location of the battery manufacturing plant"),
        )
        .field(
            Field::object("carbon_footprint", carbon_footprint)
                .title("Carbon Footprint")
                .description(
                    "The details of the carbon footprint for the battery production phases",
                ),
        );

    DataProductDefinition::new(battery_passport_request("CarbonFootprintRequest"), response)
        .version("0.1.0")
        .title("Battery Carbon Footprint")
        .description(
            "Carbon footprint of a battery as required by the European Commission's Battery \
             Act (2023/1542)",
        )
}

fn battery_health_data() -> DataProductDefinition {
    const MONTH: &str = r"^\d{4}-(0[1-9]|1[0-2])$";

    let status = Enumeration::new(
        "Status",
        ["original", "repurposed", "reused", "remanufactured", "waste"],
    );

    let original_performance = Model::new("OriginalPerformance")
        .field(
            Field::number("capacity")
                .optional()
                .title("Capacity")
                .description("The remaining capacity of the battery in ampere-hours (Ah)")
                .example(80.0),
        )
        .field(
            Field::number("power")
                .optional()
                .title("Power")
                .description("The original power capability of the battery in watts (W)")
                .example(20000.0),
        )
        .field(
            Field::number("resistance")
                .optional()
                .title("Internal Resistance")
                .description("The internal resistance of the battery pack in ohms (Ω)")
                .example(0.005),
        )
        .field(
            Field::integer("cycle_life")
                .optional()
                .title("Cycle Life")
                .ge(0.0)
                .description(
                    "The expected cycle life of the battery that exceed 80% of the capacity \
                     under the reference conditions for which it has been designed",
                )
                .example(5000),
        )
        .field(
            Field::integer("years")
                .optional()
                .title("Years")
                .description(
                    "The expected lifetime of the battery in years under the reference \
                     conditions for which it has been designed",
                )
                .example(10),
        );

    let operation_detail = Model::new("OperationDetail")
        .field(
            Field::date("measurement_date")
                .optional()
                .title("Measurement Date")
                .description("The date of the data point measurement")
                .example("2024-05-24"),
        )
        .field(
            Field::number("state_of_charge")
                .optional()
                .title("State Of Charge")
                .description("The state of charge measured in ampere-hours (Ah)")
                .example(99.8),
        )
        .field(
            Field::number("temperature")
                .optional()
                .title("Temperature")
                .description("The temperature of the battery measured in Celsius degrees")
                .example(8.0),
        );

    let fade = |name: &str, title: &str, description: &str, example: f64| {
        Field::number(name)
            .optional()
            .title(title)
            .description(description)
            .example(example)
    };

    let health_state = Model::new("HealthState")
        .field(
            Field::integer("cumulative_cycle_count")
                .optional()
                .title("Cumulative Cycle Count")
                .description("The number of charging and discharging cycles of the battery")
                .example(3500),
        )
        .field(fade(
            "capacity_fade",
            "Capacity Fade",
            "The capacity fade of the battery compared to the original capacity in percentage (%)",
            20.0,
        ))
        .field(fade(
            "power_fade",
            "Power Fade",
            "The power fade of the battery compared to the original power in percentage (%)",
            15.0,
        ))
        .field(fade(
            "resistance_increase",
            "Resistance Increase",
            "The value of resistance increase since the battery was first commissioned in \
             percentage (%)",
            10.0,
        ))
        .field(
            Field::list("operation_details", FieldType::Object(operation_detail))
                .title("Operation Details")
                .description("The periodic information of the battery operation"),
        );

    let harmful_event = Model::new("HarmfulEvent")
        .field(
            Field::date("event_date")
                .title("Event Date")
                .description("The date when the incident or accident happened")
                .example("2024-02-10"),
        )
        .field(
            Field::string("event_description")
                .optional()
                .title("Event Description")
                .max_length(250)
                .description(
                    "The description of the harmful incident that has happened to the battery",
                )
                .example("30 minutes spent in extreme temperature -50 celsius"),
        );

    let response = Model::new("HealthDataResponse")
        .field(
            Field::enumeration("status", status)
                .optional()
                .title("Status")
                .description("The status of the battery based on its history of use")
                .example("original"),
        )
        .field(
            Field::string("manufacturing_date")
                .optional()
                .title("Manufacturing Date")
                .description("The date of manufacture using month and year")
                .pattern(MONTH)
                .example("2023-07"),
        )
        .field(
            Field::string("service_initiation_date")
                .optional()
                .title("Service Initiation Date")
                .description("The date on which the battery was first commissioned")
                .pattern(MONTH)
                .example("2023-12"),
        )
        .field(
            Field::object("original_performance", original_performance)
                .optional()
                .title("Original Performance")
                .description("The details of the original performance of the battery"),
        )
        .field(
            Field::object("health_state", health_state)
                .optional()
                .title("Health State")
                .description("The state of the health of the battery"),
        )
        .field(
            Field::list("harmful_events", FieldType::Object(harmful_event))
                .title("Harmful Events")
                .description("The harmful events or incidents that have occurred for the battery"),
        );

    DataProductDefinition::new(battery_passport_request("HealthDataRequest"), response)
        .version("0.1.0")
        .title("Battery Health Data")
        .description(
            "The health and status data of a battery as required by Battery Passport \
             specification of the European Commission's Battery Act (2023/1542)",
        )
}

fn meta_artifact() -> DataProductDefinition {
    let en_standard = Model::new("EnStandardCertification").field(
        Field::string("en_standard_code")
            .optional()
            .title("EN Standard Code")
            .max_length(20)
            .description("The identification code of the EN standard that the product complies with")
            .example("EN 10002-1, EN 10002-5"),
    );

    let request = Model::new("MetaArtifactDataSheetRequest")
        .field(
            Field::string("product")
                .title("Product identifier")
                .description("Technical product identifier used by the manufacturer")
                .example("battery-100wh-s"),
        )
        .field(
            Field::string("id")
                .title("Identifier")
                .description("Unique identifier for the product")
                .example("177389-09633"),
        );

    let weight = |name: &str, title: &str, description: &str, example: &str| {
        Field::string(name)
            .optional()
            .title(title)
            .description(description)
            .max_length(10)
            .example(example)
    };

    let response = Model::new("MetaArtifactDataSheetResponse")
        .field(
            Field::string("product_name")
                .optional()
                .title("Product Name")
                .max_length(250)
                .description("The commercial name of the metal product")
                .example("HOT-DIP ZINC-COATED STEEL STRIP, HIGH STRENGTH STEEL FOR COLD FORMING"),
        )
        .field(
            Field::string("product_type")
                .optional()
                .title("Product Type")
                .max_length(250)
                .description("The type of the metal product")
                .example("Steel roll"),
        )
        .field(
            Field::object("measures", measures())
                .optional()
                .title("Measures")
                .description("The dimensional measures of the metal product"),
        )
        .field(weight("net_weight", "Net Weight", "Net weight of the steel roll", "11 720kg"))
        .field(weight(
            "gross_weight",
            "Gross Weight",
            "Gross weight of the steel roll",
            "11 745kg",
        ))
        .field(
            Field::string("eu_taric_code")
                .optional()
                .title("EU Taric Code")
                .max_length(20)
                .description("EU customs tariff code")
                .example("7210 49 00"),
        )
        .field(
            Field::list("en_standard_certification", FieldType::Object(en_standard))
                .optional()
                .title("EN Standard Certification")
                .description("The list of EN standards"),
        )
        .field(
            Field::string("treatment_type")
                .optional()
                .title("Treatment Type")
                .max_length(20)
                .description("The type of re-treatment for the steel roll")
                .example("Prelube oil"),
        );

    // Published under the food artifact's title
    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Food Artifact Nutritional Values")
        .description("Returns the nutritional values of a food product")
}

fn battery_manufacturing_data_sheet() -> DataProductDefinition {
    const MONTH: &str = r"^\d{4}-\d{2}$";

    let location = Model::new("ManufacturerLocation")
        .field(
            Field::string("country")
                .optional()
                .title("Country")
                .max_length(3)
                .description(
                    "The country code of the battery manufacturing location in Alpha-3 format",
                )
                .example("CHE"),
        )
        .field(
            Field::string("city")
                .title("City")
                .max_length(40)
                .description("The city of the battery manufacturing location")
                .example("Stabio"),
        );

    let manufacturer = manufacturer_information([
        "FZSonic",
        "Viale Europa 81",
        "VI 36075",
        "Montecchio Maggiore",
        "ITA",
        "https://www.fzsonick.com/",
        "info@fzsonick.com",
    ]);

    let battery_category = Enumeration::new(
        "BatteryCategory",
        [
            "stationary energy storage",
            "industrial battery",
            "lmt battery",
            "electric vehicle battery",
        ],
    );

    let round_trip_efficiency = Model::new("RoundTripEfficiency")
        .field(
            Field::number("initial_energy_efficiency")
                .optional()
                .title("Initial Energy Efficiency")
                .description(
                    "The initial round trip energy efficiency of an energy storage battery in \
                     percentage (%)",
                )
                .example(75.0),
        )
        .field(
            Field::number("degraded_energy_efficiency")
                .optional()
                .title("Degraded Energy Efficiency")
                .description(
                    "The round trip energy efficiency of an energy storage battery in \
                     percentage (%) at 50% of expected cycle life",
                )
                .example(60.0),
        );

    let voltage_levels = Model::new("VoltageLevels")
        .field(
            Field::number("nominal_voltage")
                .title("Nominal Voltage")
                .description("The average voltage the battery output when fully charged")
                .example(550.0),
        )
        .field(
            Field::number("maximum_voltage")
                .title("Maximum Voltage")
                .description("The largest level the battery voltage can reach")
                .example(620.0),
        )
        .field(
            Field::number("minimum_voltage")
                .title("Minimum Voltage")
                .description("The lowest level the battery voltage can reach")
                .example(180.0),
        );

    let temperature_range = Model::new("TemperatureRange")
        .field(
            Field::number("minimum_temperature")
                .title("Minimum Temperature")
                .description("The minimum temperature the battery can withstand")
                .example(-40.0)
                .le(100.0)
                .ge(-100.0),
        )
        .field(
            Field::number("maximum_temperature")
                .title("Maximum Temperature")
                .description("The maximum temperature the battery can withstand")
                .example(50.0)
                .le(100.0)
                .ge(-100.0),
        );

    let expected_lifetime = Model::new("ExpectedLifetime")
        .field(
            Field::integer("cycle_life")
                .title("Cycle Life")
                .description(
                    "Minimum number of cycles the battery can be recharged to at least 80% of \
                     initial capacity",
                )
                .example(5000),
        )
        .field(
            Field::string("reference_test")
                .title("Reference Test")
                .max_length(250)
                .description(
                    "The details of the reference test used for defining the expected lifetime",
                )
                .example("Accelerated cycle life testing"),
        )
        .field(
            Field::string("cycle_rate")
                .title("Cycle Rate")
                .description("The C-rate used in the cycle life test")
                .example("1C"),
        );

    let material_composition = Model::new("MaterialComposition")
        .field(
            Field::list("chemistry", FieldType::String)
                .title("Chemistry")
                .description("The chemical composition of the battery")
                .example(json!(["Sodium", "Cobalt"])),
        )
        .field(
            Field::list("hazardous_substances", FieldType::String)
                .title("Hazardous Substances")
                .description("The hazardous substances present in the battery")
                .example(json!(["Sulphuric acid"])),
        )
        .field(
            Field::list("critical_raw_materials", FieldType::String)
                .title("Critical Raw Materials")
                .description(
                    "The critical raw materials present in the battery in a concentration of \
                     more than 0.1% weight by weight",
                )
                .example(json!(["Cobalt"])),
        );

    let recycled_content = Model::new("RecycledContent")
        .field(
            Field::string("substance_name")
                .title("Substance Name")
                .max_length(40)
                .description("The name of the substance that has recycled content")
                .example("Cobalt"),
        )
        .field(
            Field::number("recycling_rate")
                .title("Recycling Rate")
                .description("The amount of recycled content in the substance")
                .example(8.5),
        );

    let extinguishing_agent = Model::new("ExtinguishingAgent")
        .field(
            Field::string("name")
                .title("Name")
                .max_length(250)
                .description("The registered trade name of the extinguishing agent")
                .example("Extinguishing company"),
        )
        .field(
            https_url("website")
                .optional()
                .title("Website")
                .description("The website of the battery manufacturer")
                .example("https://www.extcompany.com/"),
        )
        .field(
            Field::string("email")
                .optional()
                .pattern(EMAIL)
                .title("Email")
                .description("The email address of the battery manufacturer")
                .example("info@fzsonick.com"),
        );

    let legal_conformity = Model::new("LegalConformity")
        .field(
            Field::boolean("battery_act_compliance")
                .title("Battery Act Compliance")
                .description(
                    "The indicator if the battery complies with the requirements of the battery \
                     act or not",
                )
                .example(true),
        )
        .field(
            Field::list("requirement_conformity", FieldType::String)
                .title("Requirement Conformity")
                .description(
                    "The compliancy of the battery with other legal and standard requirements",
                )
                .example(json!(["ROHS", "CE HSE", "IEC62619"])),
        )
        .field(
            https_url("conformity_declaration")
                .title("Conformity Declaration")
                .description("The link to the EU declaration of conformity documentation")
                .example("https://company/EUdeclaration/z37-310-76"),
        );

    let section = |name: &str, model: Model, title: &str, description: &str| {
        Field::object(name, model).title(title).description(description)
    };

    let response = Model::new("ManufacturingDataSheetResponse")
        .field(
            Field::string("product_name")
                .optional()
                .title("Product Name")
                .description("The official sales name of the product")
                .example("Salt battery"),
        )
        .field(
            Field::string("battery_model")
                .title("Battery Model")
                .max_length(40)
                .description("The model of the battery")
                .example("Z37-310-76"),
        )
        .field(
            Field::enumeration("battery_category", battery_category)
                .title("Battery Category")
                .description("The category of the battery based on its intended use")
                .example("industrial battery"),
        )
        .field(section(
            "manufacturer_information",
            manufacturer,
            "Manufacturer Information",
            "The details of the battery manufacturer",
        ))
        .field(section(
            "manufacturing_location",
            location,
            "Manufacturing Location",
            "The details of the location battery manufacturing plant",
        ))
        .field(
            Field::string("manufacturing_date")
                .title("Manufacturing Date")
                .description("The date of manufacture using month and year")
                .pattern(MONTH)
                .example("2023-07"),
        )
        .field(
            Field::number("weight")
                .title("Weight")
                .description("The total net weight of the product in kilograms (kg)")
                .example(450.0),
        )
        .field(
            Field::number("capacity")
                .title("Capacity")
                .description(
                    "The total number of ampere-hours (Ah) that can be withdrawn from a fully \
                     charged battery",
                )
                .example(100.0),
        )
        .field(
            Field::number("power")
                .title("Power")
                .description("The original power capability of the battery in Watts")
                .example(25000.0),
        )
        .field(
            Field::enumeration("cell_type", Enumeration::new("CellType", ["sodium-ion"]))
                .title("Cell Type")
                .description("The type of cells used in the battery pack")
                .example("sodium-ion"),
        )
        .field(
            Field::number("resistance")
                .title("Resistance")
                .description("The internal resistance of the battery pack")
                .example(0.0),
        )
        .field(section(
            "round_trip_efficiency",
            round_trip_efficiency,
            "Round Trip Efficiency",
            "The details of the round trip energy efficiency in energy storages",
        ))
        .field(section(
            "voltage_levels",
            voltage_levels,
            "Voltage Levels",
            "The details of the voltage levels of the battery",
        ))
        .field(section(
            "temperature_range",
            temperature_range,
            "Temperature Range",
            "The details of the acceptable temperature values of the battery",
        ))
        .field(section(
            "expected_lifetime",
            expected_lifetime,
            "Expected Lifetime",
            "The details of the battery lifetime",
        ))
        .field(section(
            "material_composition",
            material_composition,
            "Material Composition",
            "The details of the material composition of the battery",
        ))
        .field(
            Field::list("recycled_content", FieldType::Object(recycled_content.clone()))
                .title("Recycled Content")
                .description("The recycled content information present in the battery"),
        )
        .field(
            Field::list("renewable_content", FieldType::Object(recycled_content))
                .title("Renewable Content")
                .description("The renewable content information present in the battery"),
        )
        .field(section(
            "extinguishing_agent",
            extinguishing_agent,
            "Extinguishing Agent",
            "The details of an agent that can extinguish the battery",
        ))
        .field(section(
            "legal_conformity",
            legal_conformity,
            "Legal Conformity",
            "The details of the conformity of the battery with the legal and harmonized \
             standards",
        ))
        .field(
            Field::string("warranty")
                .title("Warranty")
                .description("The date when the battery warranty expires")
                .pattern(MONTH)
                .example("2028-07"),
        );

    DataProductDefinition::new(
        battery_passport_request("ManufacturingDataSheetRequest"),
        response,
    )
    .version("0.1.0")
    .title("Manufacturing Data Sheet")
    .description(
        "Manufacturing data sheet as required by Battery Passport specification of the \
         European Commission's Battery Act (2023/1542)",
    )
}

fn drill_manufacturing_data_sheet() -> DataProductDefinition {
    let manufacturer = manufacturer_information([
        "Sandvik",
        "Kungsbron 1",
        "111 22",
        "Stockholm",
        "SWE",
        "https://www.home.sandvik",
        "info@sandvik.com",
    ]);

    let measure = |name: &str, title: &str, description: &str, example: f64| {
        Field::number(name)
            .title(title)
            .description(description)
            .example(example)
    };

    let response = Model::new("ManufacturingDataSheetResponse")
        .field(
            Field::string("product_name")
                .max_length(150)
                .title("Product Name")
                .description("The official sales name of the product")
                .example("BEV Longhole Drill"),
        )
        .field(
            Field::object("manufacturer_information", manufacturer)
                .title("Manufacturer Information")
                .description("The details of the drill manufacturer"),
        )
        .field(measure(
            "boom_coverage",
            "Boom Coverage",
            "The largest distance to which the drill boom can reach from the machine in \
             meters (m)",
            3.0,
        ))
        .field(measure(
            "tramming_distance",
            "Tramming Distance",
            "The maximum tramming distance of the drill movement in kilometers (km)",
            3.0,
        ))
        .field(measure(
            "maximum_hole_length",
            "Hole Length",
            "The maximum length of the drilled hole in meters (m)",
            54.0,
        ))
        .field(measure(
            "minimum_hole_diameter",
            "Minimum Hole Diameter",
            "The minimum diameter measure of the drilling hole in millimeters (mm)",
            76.0,
        ))
        .field(measure(
            "maximum_hole_diameter",
            "Maximum Hole Diameter",
            "The maximum diameter measure of the drilling hole in millimeters (mm)",
            127.0,
        ))
        .field(measure(
            "drilling_power",
            "Drilling Power",
            "The maximum drilling power of the machine in kilowatts (kW)",
            160.0,
        ))
        .field(
            https_url("reference_data_sheet")
                .title("Reference Material")
                .description("The link to the detailed product specifications")
                .example("https://company/products/dl422ie/productdocument"),
        )
        .field(
            https_url("safety_data_sheet")
                .title("Safety Data Sheet")
                .description("The link to the safety control measures of the product")
                .example("https://company/products/dl422ie/productdocument"),
        );

    let request = bounded_product_identification(
        Model::new("ManufacturingDataSheetRequest"),
        "dl422ie",
        "71b51878-8a00-11ee-b9d1-0242ac120002",
    );

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Drill Manufacturing Data Sheet")
        .description("Manufacturing data sheet of a Mobile Drill Machine")
}
