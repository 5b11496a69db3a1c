//! Data product definition catalog and tooling.
//!
//! This library declares the request/response schemas of data products,
//! checks that the published examples honour the declared constraints and
//! converts every definition into an OpenAPI document with a browsable
//! HTML page next to it.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod definition;
pub mod error;
pub mod html;
pub mod openapi;
pub mod schema;
pub mod utils;
pub mod validate;

pub use crate::{
    catalog::{Catalog, CatalogEntry},
    config::Config,
    convert::convert_definitions,
    definition::DataProductDefinition,
    error::{Error, Result},
    html::{bootstrap_html, HtmlRenderer},
    openapi::{to_openapi, ConversionOptions, OpenApiContext},
    validate::{validate_catalog, validate_definition, Violation},
};
