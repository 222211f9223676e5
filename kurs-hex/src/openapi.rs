//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use kurs_types::domain::{Conversion, ConversionKind, CurrencyCode, RateEntry};
use kurs_types::dto::{ConvertRequest, ConvertResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Available currency IDs list
#[utoipa::path(
    get,
    path = "/api/currencies",
    tag = "rates",
    responses(
        (status = 200, description = "Distinct ISO-4217 numeric codes in the current rate table, ascending", body = Vec<CurrencyCode>),
        (status = 502, description = "Rate provider unavailable")
    )
)]
async fn currencies() {}

/// Calculate an exchange amount
#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "rates",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion resolved via a direct rate or one intermediate currency", body = ConvertResponse),
        (status = 400, description = "Invalid amount or no exchange direction between the codes"),
        (status = 502, description = "Rate provider unavailable")
    )
)]
async fn convert() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kurs API",
        description = "Currency conversion over provider-published exchange rates",
        version = "1.0.0"
    ),
    paths(health, currencies, convert),
    components(schemas(
        ConvertRequest,
        ConvertResponse,
        Conversion,
        ConversionKind,
        CurrencyCode,
        RateEntry
    )),
    tags(
        (name = "rates", description = "Rate listing and conversion"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
