use serde_json::json;

use crate::definition::DataProductDefinition;
use crate::schema::{Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![("AirQuality/Current_v1.0", current())]
}

fn current() -> DataProductDefinition {
    let request = Model::new("CurrentAirQualityRequest")
        .field(
            Field::number("lat")
                .title("Latitude")
                .description("The latitude coordinate of the desired location")
                .example(60.192059)
                .ge(-90.0)
                .le(90.0),
        )
        .field(
            Field::number("lon")
                .title("Longitude")
                .description("The longitude coordinate of the desired location")
                .example(24.945831)
                .ge(-180.0)
                .le(180.0),
        );

    let response = Model::new("CurrentAirQualityResponse")
        .field(
            Field::integer("air_quality_index")
                .title("Air Quality Index")
                .description(
                    "Current air quality index.\nRanges:\n0-50 Good;\n51-100 Moderate;\n\
                     101-150 Unhealthy For Sensitive Groups;\n151-200 Unhealthy;\n\
                     201-300 Very Unhealthy;\n301+ Hazardous",
                )
                .ge(0.0)
                .example(30),
        )
        .field(
            Field::string("timestamp")
                .title("Timestamp")
                .description("Current timestamp in RFC 3339 format")
                .example("2020-04-03T13:00:00Z"),
        )
        .field(
            Field::list("attribution", FieldType::String)
                .title("Source Attribution")
                .description("List of text to show required credits to data sources")
                .example(json!([
                    "Eesti välisõhu kvaliteet - Estonian ambient air quality",
                    "World Air Quality Index Project"
                ])),
        );

    DataProductDefinition::new(request, response)
        .version("1.0.0")
        .title("Current air quality in a given location")
        .description(
            "Current Air Quality Index (AQI) in a given location with attribution of the sources",
        )
        .route_description("Current air quality")
}
