use crate::definition::DataProductDefinition;
use crate::schema::{Enumeration, Field, FieldType, Model};

use super::passport::product_identification;

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![("DigitalProductPassport/LogisticsEmissions_v0.1", logistics_emissions())]
}

fn freight_type() -> Enumeration {
    Enumeration::new(
        "FreightType",
        [
            "Palletized",
            "Dry bulk",
            "Liquid bulk",
            "Containerized",
            "Vehicle transport",
            "Heavy cargo",
            "Light cargo",
        ],
    )
}

fn vessel_type() -> Enumeration {
    Enumeration::new(
        "VesselType",
        [
            "Bulk carrier",
            "Chemical tanker",
            "General cargo",
            "Ro-Ro",
            "Liquefied gas tanker",
            "Oil tanker",
            "Other liquid tanker",
            "Container",
            "Vehicle carrier",
        ],
    )
}

fn emissions_per_tce() -> Model {
    Model::new("EmissionsPerTCE")
        .field(
            Field::string("description")
                .optional()
                .max_length(250)
                .title("Description")
                .description("The description of the transport chain element (TCE) related to the leg")
                .example("Loading"),
        )
        .field(
            Field::number("emissions")
                .optional()
                .title("Emissions")
                .description(
                    "The green house gas (GHG) emissions of the transport chain element related \
                     to the transport leg in CO2e tonnes",
                )
                .example(1.2),
        )
        .field(
            Field::string("source")
                .optional()
                .max_length(250)
                .title("Source For The Emission")
                .description("The source that generated the emission in the TCE")
                .example("Diesel"),
        )
}

/// Fields shared by road and sea legs, up to the mode specific ones
fn leg(name: &str, origin: &str, destination: &str) -> Model {
    Model::new(name)
        .field(
            Field::string("leg_identifier")
                .optional()
                .max_length(20)
                .title("Leg Identifier")
                .description("The leg identifier")
                .example("7623456365"),
        )
        .field(
            Field::string("origin")
                .optional()
                .max_length(250)
                .title("Origin")
                .description("The location of the transport origin")
                .example(origin),
        )
        .field(
            Field::string("destination")
                .optional()
                .max_length(250)
                .title("Destination")
                .description("The location of the transport destination")
                .example(destination),
        )
}

fn totals(model: Model, mode: &str, total: f64, intensity: i64) -> Model {
    model
        .field(
            Field::number("total_emissions")
                .optional()
                .title("Total Emissions")
                .description(
                    "The total green house gas (GHG) emissions of the road transport and other \
                     related logistics hub operations measured in CO2e tonnes",
                )
                .example(total),
        )
        .field(
            Field::number("emission_intensity")
                .optional()
                .title("Emission Intensity")
                .description(format!(
                    "The GHG emission intensity of the {mode} transport per transported tonne \
                     and kilometer in CO2e grams / tonne / km"
                ))
                .example(intensity),
        )
        .field(
            Field::list("emissions_per_tce", FieldType::Object(emissions_per_tce()))
                .title("Emissions per TCE")
                .description(format!(
                    "The GHG emissions of the transport chain element related to the {mode} \
                     transport leg"
                )),
        )
}

fn road_leg() -> Model {
    let model = leg("RoadLeg", "Tampere", "Turku")
        .field(
            Field::enumeration("freight_type", freight_type())
                .optional()
                .title("Freight Type")
                .description("The type of the freight used for the road transport")
                .example("Palletized"),
        )
        .field(
            Field::enumeration(
                "condition",
                Enumeration::new("RoadLegFreightCondition", ["Ambient", "Temperature-controlled"]),
            )
            .optional()
            .title("Condition")
            .description("The conditions that the cargo is being transported with")
            .example("Ambient"),
        )
        .field(
            Field::enumeration(
                "journey_type",
                Enumeration::new("JourneyType", ["Long-haul", "Collection and delivery"]),
            )
            .optional()
            .title("Journey Type")
            .description("The type of the road transport")
            .example("Long-haul"),
        )
        .field(
            Field::enumeration(
                "contract_type",
                Enumeration::new("ContractType", ["Shared transport", "Dedicated contract"]),
            )
            .optional()
            .title("Contract Type")
            .description("The type of the transport contract")
            .example("Dedicated contract"),
        );
    totals(model, "road", 5.8, 200)
}

fn sea_leg() -> Model {
    let model = leg("SeaLeg", "Turku", "Stockholm")
        .field(
            Field::enumeration("vessel_type", vessel_type())
                .optional()
                .title("Vessel Type")
                .description("The type of the vessel used for the sea transport")
                .example("Ro-Ro"),
        )
        .field(
            Field::enumeration(
                "freight_condition",
                Enumeration::new(
                    "SeaLegFreightCondition",
                    [
                        "Ambient",
                        "Temperature-controlled",
                        "Mixed ambient and temperature-controlled",
                    ],
                ),
            )
            .optional()
            .title("Freight Condition")
            .description("The conditions that the cargo is being transported with")
            .example("Temperature-controlled"),
        )
        .field(
            Field::enumeration("service_type", Enumeration::new("ServiceType", ["Scheduled", "Tramp"]))
                .optional()
                .title("Service Type")
                .description("The type of the sea transport service")
                .example("Scheduled"),
        );
    totals(model, "sea", 7.4, 500)
}

fn logistics_emissions() -> DataProductDefinition {
    let request = product_identification(
        Model::new("LogisticsEmissionsRequest"),
        "french-fries-500g",
        "550e8400-e29b-41d4-a716-446655440000",
    );

    let response = Model::new("LogisticsEmissionsResponse")
        .field(
            Field::list("road_freight_emissions", FieldType::Object(road_leg()))
                .title("Road Freight Emissions"),
        )
        .field(
            Field::list("sea_freight_emissions", FieldType::Object(sea_leg()))
                .title("Sea Freight Emissions"),
        )
        .field(
            Field::string("waybill_number")
                .title("Waybill Number")
                .description(
                    "The unique identifier which is used to track a shipment through the entire \
                     delivery chain",
                )
                .example("5308956234")
                .max_length(20),
        );

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Logistics Emissions")
        .description(
            "Returns the total emission per leg for an end-to-end shipment compliant with the \
             European Union's count emissions reporting regulation",
        )
}
