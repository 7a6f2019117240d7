//! Route tables and the assembled application router.

mod items;
mod ops;

pub use ops::ops_routes;
pub use items::item_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Item routes plus health/ready/version, with request tracing and a body size limit.
///
/// The limit is enforced while the body extractor buffers, so an oversized body gets the
/// same JSON 413 whether or not the client sent `Content-Length`.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(item_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
}
