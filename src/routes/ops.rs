//! Operational endpoints for process supervisors: liveness, readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness means the `items` table answers a query, not merely that the pool is open.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

impl Readiness {
    const READY: Self = Self {
        status: "ok",
        database: "ok",
    };
    const DEGRADED: Self = Self {
        status: "degraded",
        database: "unavailable",
    };
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD_INFO: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.items.check().await {
        Ok(()) => (StatusCode::OK, Json(Readiness::READY)),
        Err(e) => {
            tracing::warn!(error = %e, "items table not queryable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Readiness::DEGRADED))
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD_INFO)
}

/// GET /health, GET /ready, GET /version.
pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
