use crate::definition::DataProductDefinition;
use crate::schema::{Field, Model};

pub(super) fn definitions() -> Vec<(&'static str, DataProductDefinition)> {
    vec![
        (
            "draft/Product/Manufacturing/EnvironmentalFootprint",
            environmental_footprint(),
        ),
        (
            "draft/DataProducts/Product/DimensionsAndWeights",
            dimensions_and_weights(),
        ),
    ]
}

fn environmental_footprint() -> DataProductDefinition {
    let request = Model::new("EnvironmentalFootprintRequest").field(
        Field::string("product_id")
            .title("Product ID")
            .description("The product ID given by the manufacturer")
            .example("MPP48V-296cde7f"),
    );

    let response = Model::new("EnvironmentalFootprintResponse")
        .field(
            Field::number("carbon_equivalent")
                .title("Carbon Equivalent (CO2e) [kg]")
                .description(
                    "The amount of emissions from all greenhouse gases converted to CO2 \
                     emission equivalents in the product manufacturing phase",
                )
                .example(500.0),
        )
        .field(
            Field::number("material_waste")
                .title("Material Waste [kg]")
                .description(
                    "The amount of material waste produced in the product manufacturing phase",
                )
                .example(20.0),
        );

    DataProductDefinition::new(request, response)
        .summary("Environmental Footprint information for a product")
}

fn dimensions_and_weights() -> DataProductDefinition {
    let request = Model::new("DimensionsAndWeightsRequest")
        .field(Field::string("product_code").title("Product code"));

    let response = Model::new("DimensionsAndWeightsResponse")
        .field(Field::string("gross_weight").title("Gross weight"))
        .field(Field::number("height").title("Height"))
        .field(Field::number("length").title("Length"))
        .field(Field::number("net_weight").title("Net weight"))
        .field(Field::string("product_description").title("Product description"))
        .field(Field::string("product_name").title("Product name"))
        .field(Field::number("volume").title("Volume"))
        .field(Field::number("width").title("Width"));

    DataProductDefinition::new(request, response).description("Dimensions And Weights")
}
