//! Web application router and middleware setup.

use crate::metrics::SnapshotStore;
use crate::web::handlers;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the axum application serving the snapshot held by `store`.
pub fn create_app(store: SnapshotStore) -> Router {
    Router::new()
        .route("/", get(handlers::get_snapshot))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(store)
}
