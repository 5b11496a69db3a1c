use serde_json::json;

use crate::definition::DataProductDefinition;
use crate::schema::{Enumeration, Field, FieldType, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        ("Energy/Battery/ChargingHistory_v1.0", charging_history()),
        ("Energy/Battery/ProductDataSheet_v1.0", product_data_sheet()),
        ("DPP/Energy/Battery/ProductDataSheet_v0.1", passport_data_sheet()),
    ]
}

fn charging_history() -> DataProductDefinition {
    let request = Model::new("ChargingHistoryRequest")
        .field(
            Field::string("serial_number")
                .title("Serial Number")
                .description("The serial number of the battery")
                .example("MPP48V-296cde7f"),
        )
        .field(
            Field::datetime("start")
                .optional()
                .title("Start Time")
                .description("Include history entries starting from this time (inclusive)")
                .example("2022-09-09T00:00:00"),
        )
        .field(
            Field::datetime("end")
                .optional()
                .title("End Time")
                .description("Include history entries until this time (exclusive)")
                .example("2022-09-10T00:00:00"),
        )
        .field(
            Field::integer("limit")
                .default_value(100)
                .ge(1.0)
                .le(100.0)
                .title("Limit")
                .description("Limit number of history entries to return"),
        )
        .field(
            Field::integer("offset")
                .default_value(0)
                .ge(0.0)
                .title("Offset")
                .description("Offset of history records to return"),
        );

    let entry = Model::new("ChargingHistoryEntry")
        .field(
            Field::datetime("time")
                .title("Time")
                .description("Time of the charging history event")
                .example("2022-09-10T00:00:00"),
        )
        .field(
            Field::number("operating_hours")
                .title("Operating Hours [h]")
                .description("The cumulative operating hours of the battery")
                .example(428.7),
        )
        .field(
            Field::integer("cycle_count")
                .title("Cycle Count")
                .description("The cycle count of the battery")
                .example(15),
        )
        .field(
            Field::number("max_capacity")
                .title("Maximum Capacity [Ah]")
                .description("The maximum capacity of the battery")
                .example(46.0),
        );

    let response = Model::new("ChargingHistoryResponse")
        .field(
            Field::list("battery_charging_history", FieldType::Object(entry))
                .title("Battery Charging History"),
        )
        .field(
            Field::integer("total_count")
                .title("Total Count")
                .description("Total count of history entries")
                .example(1),
        );

    DataProductDefinition::new(request, response)
        .version("1.0.0")
        .title("Charging history of a battery")
        .description("Charging history of a battery")
}

fn cell_type() -> Enumeration {
    Enumeration::new("CellType", ["lithium-titanate", "lithium-ion polymer"])
}

fn ip_code() -> Enumeration {
    const WATER: [&str; 12] = ["0", "1", "2", "3", "4", "4K", "5", "6", "6K", "7", "8", "9K"];
    let mut codes = Vec::new();
    for dust in ["5", "6"] {
        codes.push(format!("IP{dust}X"));
        codes.extend(WATER.iter().map(|water| format!("IP{dust}{water}")));
        codes.push(format!("IP{dust}KX"));
        codes.extend(WATER.iter().map(|water| format!("IP{dust}K{water}")));
    }
    Enumeration::new("IPCode", codes)
}

fn compliance_standard() -> Enumeration {
    Enumeration::new(
        "ComplianceStandard",
        [
            "ECE R100",
            "ECE R10",
            "UN 38.3",
            "ISO 16750",
            "IEC 61508 SIL 2",
            "ISO 13849 PL C",
            "IEC 62061 SIL 2",
        ],
    )
}

fn voltage() -> Model {
    Model::new("Voltage")
        .field(Field::number("min").title("Minimum voltage").example(38.0))
        .field(Field::number("max").title("Maximum voltage").example(56.0))
        .field(Field::number("nominal").title("Nominal voltage").example(48.3))
}

fn dimensions() -> Model {
    Model::new("Dimensions")
        .field(Field::integer("length").title("Length [mm]").example(483))
        .field(Field::integer("width").title("Width [mm]").example(380))
        .field(Field::integer("height").title("Height [mm]").example(160))
}

fn operating_temperature() -> Model {
    Model::new("OperatingTemperature")
        .field(
            Field::number("min")
                .title("Minimum operating temperature [°C]")
                .example(-30.0),
        )
        .field(
            Field::number("max")
                .title("Maximum operating temperature [°C]")
                .example(55.0),
        )
        .field(
            Field::number("recommended_min")
                .title("Minimum recommended operating temperature [°C]")
                .example(5.0),
        )
        .field(
            Field::number("recommended_max")
                .title("Maximum recommended operating temperature [°C]")
                .example(35),
        )
}

/// Response fields after the manufacturer/identification block
fn technical_fields(model: Model) -> Model {
    model
        .field(
            Field::string("name")
                .title("Product Name")
                .example("Modular Power Pack, 48 V"),
        )
        .field(
            Field::enumeration("cell_type", cell_type())
                .title("Cell Type")
                .example("lithium-titanate"),
        )
        .field(
            Field::number("capacity")
                .title("Capacity")
                .description("Battery capacity in kWh")
                .example(2.2),
        )
        .field(
            Field::number("energy")
                .title("Energy (Ah)")
                .description("Energy, Ah [1C @ 25°C]")
                .example(46.0),
        )
        .field(
            Field::object("voltage", voltage())
                .title("Voltage")
                .description("Information about the voltage of the battery"),
        )
        .field(
            Field::number("peak_discharging_power")
                .title("Peak Discharging Power [kW]")
                .example(20.0),
        )
        .field(
            Field::number("peak_charging_power")
                .title("Peak Charging Power [kW]")
                .example(20.0),
        )
        .field(
            Field::number("continuous_power")
                .title("Continuous Power [kW]")
                .example(10.0),
        )
        .field(
            Field::number("standby_consumption")
                .title("Standby Power Consumption [W]")
                .example(1.0),
        )
        .field(
            Field::integer("cycle_life")
                .title("Cycle Life")
                .description(
                    "Minimum number of cycles the battery can be recharged to at least 80% of \
                     initial capacity",
                )
                .example(20000),
        )
        .field(
            Field::object("dimensions", dimensions())
                .title("Dimensions")
                .description("Physical dimensions of the battery"),
        )
        .field(
            Field::number("weight")
                .title("Weight [kg]")
                .description("Total dry weight [kg]")
                .example(41.0),
        )
        .field(
            Field::object("operating_temperature", operating_temperature())
                .title("Operating Temperature [°C]"),
        )
        .field(
            Field::enumeration("ip_rating", ip_code())
                .title("IP Rating")
                .example("IP6K9K"),
        )
        .field(
            Field::number("max_coolant_pressure")
                .title("Max Coolant Pressure [bar]")
                .example(3.5),
        )
        .field(
            Field::set("standards_compliance", FieldType::Enum(compliance_standard()))
                .title("Standards Compliance")
                .example(json!([
                    "ECE R100",
                    "ECE R10",
                    "UN 38.3",
                    "ISO 16750",
                    "IEC 61508 SIL 2",
                    "ISO 13849 PL C",
                    "IEC 62061 SIL 2"
                ])),
        )
}

fn product_code() -> Field {
    Field::string("product_code")
        .title("Product Code")
        .description("The product code used by the manufacturer")
        .example("MPP48V")
}

fn manufacturer() -> Field {
    Field::string("manufacturer")
        .title("Manufacturer")
        .description("The manufacturer of the battery")
        .example("Valmet Automotive")
}

fn product_data_sheet() -> DataProductDefinition {
    let request = Model::new("BatteryDataRequest").field(product_code());
    let response = technical_fields(
        Model::new("BatteryDataResponse")
            .field(manufacturer())
            .field(product_code()),
    );

    DataProductDefinition::new(request, response)
        .version("1.0.0")
        .title("Battery product data sheet")
        .description("Technical details of a battery such as capacity and voltage")
}

fn passport_data_sheet() -> DataProductDefinition {
    let product = Field::string("product")
        .title("Product identifier")
        .description("Technical product identifier used by the manufacturer")
        .example("battery-100wh-s");
    let id = Field::string("id")
        .title("Identifier")
        .description("Unique identifier of the product")
        .example("177389-09633");

    let request = Model::new("BatteryDataRequest")
        .field(product.clone())
        .field(id.clone());
    let response = technical_fields(
        Model::new("BatteryDataResponse")
            .field(manufacturer())
            .field(product)
            .field(id),
    );

    DataProductDefinition::new(request, response)
        .version("0.1.0")
        .title("Battery product data sheet")
        .description("Technical details of a battery such as capacity and voltage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_codes() {
        let codes = ip_code();
        assert_eq!(codes.values.len(), 52);
        assert_eq!(codes.values.first().map(String::as_str), Some("IP5X"));
        for code in ["IP54K", "IP59K", "IP6K9K", "IP69K", "IP5KX"] {
            assert!(codes.contains(code), "{code} missing");
        }
        assert!(!codes.contains("IP70"));
    }
}
