//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use kurs_types::{AppError, ConvertRequest, ConvertResponse, KeyValueStore, RateProvider};

use crate::RateService;

/// Application state shared across handlers.
pub struct AppState<S: KeyValueStore, P: RateProvider> {
    pub service: RateService<S, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List the currency codes present in the current rate table.
#[tracing::instrument(skip(state))]
pub async fn currencies<S: KeyValueStore + 'static, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.service.available_currencies().await?;
    Ok(Json(currencies))
}

/// Compute a conversion between two currencies.
#[tracing::instrument(
    skip(state),
    fields(from = %req.currency_from, to = %req.currency_to, amount = req.amount)
)]
pub async fn convert<S: KeyValueStore + 'static, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert(req).await?;
    Ok(Json(ConvertResponse { result }))
}
