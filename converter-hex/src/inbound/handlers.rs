//! HTTP request handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use converter_types::{
    ConversionFailure, ConversionRequest, ConversionResponse, ExchangeRateProvider, ServiceError,
};

use crate::CurrencyService;
use crate::openapi::ApiDoc;

/// How service errors are turned into HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStatusMode {
    /// Every failure is reported as 500, whatever its kind.
    #[default]
    Flattened,
    /// Each failure uses the status code of its kind (400/401/404/500).
    Typed,
}

impl ErrorStatusMode {
    pub fn status_for(&self, err: &ServiceError) -> StatusCode {
        match self {
            ErrorStatusMode::Flattened => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorStatusMode::Typed => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl FromStr for ErrorStatusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flattened" => Ok(ErrorStatusMode::Flattened),
            "typed" => Ok(ErrorStatusMode::Typed),
            _ => Err(format!("Unknown error status mode: {}", s)),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState<P: ExchangeRateProvider> {
    pub service: CurrencyService<P>,
    pub status_mode: ErrorStatusMode,
}

/// Service error paired with the status mode used to render it.
pub struct ApiError {
    pub error: ServiceError,
    pub mode: ErrorStatusMode,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.mode.status_for(&self.error);
        (status, Json(ConversionFailure::new(self.error.message()))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Convert an amount between two currencies.
///
/// A body that cannot be read as a conversion request is reported through
/// the same failure envelope as any other bad input.
#[tracing::instrument(skip(state, payload))]
pub async fn convert<P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let result = match payload {
        Ok(Json(req)) => state.service.convert(req).await,
        Err(rejection) => Err(ServiceError::BadRequest(rejection.body_text())),
    };

    match result {
        Ok(data) => Ok((StatusCode::OK, Json(ConversionResponse::new(data)))),
        Err(error) => {
            tracing::error!(
                kind = error.kind(),
                status = error.status_code(),
                "Error in currency conversion: {}",
                error
            );
            Err(ApiError {
                error,
                mode: state.status_mode,
            })
        }
    }
}
