//! Routes for per-order location history.
//!
//! The order identifier is the path suffix after `/location/`. It is opaque
//! text: anything non-empty is accepted as a key.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{any, put};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};

use location_history_core::location::Location;
use location_history_core::repository::UNBOUNDED;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /location/{order_id}.
#[derive(Debug, Serialize)]
pub struct OrderHistoryResponse {
    /// The order identifier, echoed from the request path.
    pub order_id: String,
    /// Recorded locations; oldest first for unbounded reads, newest first
    /// for capped reads.
    pub history: Vec<Location>,
}

/// PUT /location/{order_id}
///
/// The body is read raw rather than through the `Json` extractor so that an
/// empty body and a malformed body map to distinct failures.
#[instrument(skip(state, body), fields(order_id = %order_id))]
async fn record_location(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if order_id.is_empty() {
        return Err(ApiError::MissingOrderId);
    }
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let location: Location = serde_json::from_slice(&body).map_err(ApiError::MalformedLocation)?;

    info!("recording location");

    state.history.append(&order_id, location).await?;

    Ok(StatusCode::OK)
}

/// GET /location/{order_id}?max=N
///
/// `max` is parsed by hand instead of through a typed `Query` extractor so
/// that a malformed value is classified as an internal failure rather than
/// rejected by the framework.
#[instrument(skip(state, params), fields(order_id = %order_id))]
async fn get_history(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<OrderHistoryResponse>, ApiError> {
    if order_id.is_empty() {
        return Err(ApiError::MissingOrderId);
    }

    // An empty `max=` is treated the same as an absent parameter.
    let max = match params.get("max").filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(ApiError::MalformedMaxParameter)?,
        None => UNBOUNDED,
    };

    let history = state.history.history(&order_id, max).await?;

    info!(max, returned = history.len(), "read location history");

    Ok(Json(OrderHistoryResponse { order_id, history }))
}

/// DELETE /location/{order_id}
///
/// Deleting an order that has no history answers 404, mirroring the read
/// contract.
#[instrument(skip(state), fields(order_id = %order_id))]
async fn delete_history(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if order_id.is_empty() {
        return Err(ApiError::MissingOrderId);
    }

    state.history.delete(&order_id).await?;

    info!("deleted location history");

    Ok(StatusCode::OK)
}

/// Any method on the bare prefix, where no order identifier is present.
async fn missing_order_id() -> ApiError {
    ApiError::MissingOrderId
}

/// Returns the router for the location history endpoints.
///
/// The identifier is the whole path suffix, so the wildcard capture lets an
/// opaque id span multiple segments (`a/b`). The bare prefix — with or
/// without a trailing slash — carries no identifier and answers 400: the
/// `"/"` route covers the prefix itself, and the fallback covers the
/// trailing-slash form, which neither the `"/"` route nor the wildcard
/// (non-empty by definition) matches. Methods other than PUT/GET/DELETE on
/// `/{*order_id}` answer 405 Method Not Allowed.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(missing_order_id))
        .route(
            "/{*order_id}",
            put(record_location).get(get_history).delete(delete_history),
        )
        .fallback(missing_order_id)
}
