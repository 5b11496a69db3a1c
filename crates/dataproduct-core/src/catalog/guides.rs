//! Definitions used by the dataspace guides and tests

use serde_json::json;

use crate::definition::DataProductDefinition;
use crate::schema::{Constraints, Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        ("test/ioxio-dataspace-guides/Country/BasicInfo", country_basic_info()),
        ("test/Indoor/BLEBeacons", ble_beacons()),
    ]
}

fn country_code() -> Field {
    Field::string("code")
        .title("Code")
        .description("ISO 3166-1 alpha-2 code for the country")
        .example("FI")
        .min_length(2)
        .max_length(2)
}

fn country_basic_info() -> DataProductDefinition {
    let capital = Model::new("Capital")
        .field(
            Field::string("name")
                .title("Name")
                .description("The name of the capital of the Country")
                .example("Helsinki"),
        )
        .field(
            Field::number("lat")
                .title("Latitude")
                .description("The latitude coordinate of the Capital")
                .ge(-90.0)
                .le(90.0)
                .example(60.170833),
        )
        .field(
            Field::number("lon")
                .title("Longitude")
                .description("The longitude coordinate of the Capital")
                .ge(-180.0)
                .le(180.0)
                .example(24.9375),
        );

    let request = Model::new("BasicCountryInfoRequest").field(country_code());

    let response = Model::new("BasicCountryInfoResponse")
        .field(country_code())
        .field(
            Field::string("name")
                .title("Name")
                .description("The name of the country")
                .example("Finland"),
        )
        .field(
            Field::number("area")
                .title("Area")
                .description("The area of the country in km^2")
                .example(338455),
        )
        .field(
            Field::list("languages", FieldType::String)
                .item_constraints(Constraints::new().min_length(2).max_length(2))
                .title("Official languages")
                .description("ISO 639-1 language codes for the official languages")
                .example(json!(["fi", "sv"])),
        )
        .field(
            Field::object("capital", capital)
                .optional()
                .title("Capital")
                .description("The capital of the country, legislative if multiple"),
        );

    DataProductDefinition::new(request, response)
        .title("Information about a country")
        .description("Information about a country")
}

fn ble_beacons() -> DataProductDefinition {
    let beacon = Model::new("Beacon")
        .field(
            Field::string("beacon_id")
                .title("Beacon ID")
                .description("Beacon ID")
                .example("0d9b38d3-f8a0-4efe-ad62-f781fea62b86"),
        )
        .field(
            Field::number("rssi")
                .title("RSSI")
                .description("Received Signal Strength Indication, in dBm")
                .example(-55),
        );

    // The request is a plain model; only the nested beacons are camelCased.
    let request = Model::plain("BLEBeaconsRequest")
        .field(Field::list("beacons", FieldType::Object(beacon)));

    let response = Model::new("BLEBeaconsResponse")
        .field(
            Field::string("location_id")
                .title("Location ID")
                .description("Location ID")
                .example("849cc493-efb7-483f-b634-7a44849270f9"),
        )
        .field(
            Field::string("location_name")
                .title("Location name")
                .description("Location name")
                .example("Deck #3"),
        );

    DataProductDefinition::new(request, response)
        .title("Indoor location based on BLE beacons")
        .description(
            "Determine the indoor location based on BLE beacons a device can hear and the \
             signal strength in dBm.",
        )
}
