//! Router assembly.

use axum::routing::{get, post};
use axum::Router;

use twin_graph::GraphClient;

use crate::handlers;

/// Build the application router with the graph client as shared state.
pub fn app(graph: GraphClient) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/sandbox/upload-sla", post(handlers::upload_sla))
        .with_state(graph)
}
