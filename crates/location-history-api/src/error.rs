//! Location history — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use location_history_core::error::HistoryError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message, safe to show to the caller.
    pub message: &'static str,
}

/// Request-handling errors, classified for status mapping.
///
/// The `Display` form carries the full diagnostic and is logged; callers
/// only ever see the reduced `ErrorBody` message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request path carried no order identifier.
    #[error("order id is missing from request path")]
    MissingOrderId,

    /// An append request arrived with an empty payload.
    #[error("append request body is empty")]
    EmptyBody,

    /// An append payload could not be parsed as a location.
    #[error("failed to parse location payload: {0}")]
    MalformedLocation(#[source] serde_json::Error),

    /// The `max` query parameter was present but not an integer.
    #[error("failed to parse max parameter: {0}")]
    MalformedMaxParameter(#[source] std::num::ParseIntError),

    /// The history store reported a failure.
    #[error(transparent)]
    History(#[from] HistoryError),
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        let (status, error, message) = match self {
            Self::MissingOrderId => (
                StatusCode::BAD_REQUEST,
                "order_id_missing",
                "order id is missing",
            ),
            Self::EmptyBody => (StatusCode::BAD_REQUEST, "body_missing", "body is missing"),
            Self::MalformedLocation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "malformed_location",
                "could not process provided location value",
            ),
            Self::MalformedMaxParameter(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "malformed_parameter",
                "failed to process GET parameter",
            ),
            Self::History(HistoryError::OrderNotFound(_)) => (
                StatusCode::NOT_FOUND,
                "order_not_found",
                "order doesn't exist",
            ),
            Self::History(HistoryError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "history store failed",
            ),
        };
        (status, ErrorBody { error, message })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        // Full diagnostic goes to the log; the caller gets the reduced body.
        tracing::error!(status = %status, error = %self, "request failed");

        (status, Json(body)).into_response()
    }
}
