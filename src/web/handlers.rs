//! HTTP handlers for the exporter endpoint.

use crate::error::SystemError;
use crate::metrics::SnapshotStore;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Serve the current snapshot as JSON.
pub async fn get_snapshot(State(store): State<SnapshotStore>) -> Response {
    let snapshot = store.read();
    json_response(&*snapshot)
}

/// Encode `value` as the endpoint's JSON response.
///
/// Encoding errors become a `500` with the error text as a plain-text body.
pub fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            let err = SystemError::from(e);
            error!("Failed to serialize snapshot: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
