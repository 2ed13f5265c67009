//! HTTP API for keygate license verification.
//!
//! Routes:
//! - `POST /api/verify`: checks a license key for a bot
//! - `GET /health`: liveness probe
//!
//! The license store is shared read-only through router state.

mod error;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use keygate_license::LicenseStore;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use error::ApiError;
pub use routes::{HealthResponse, VerifyResponse, health_handler, verify_handler};

/// Build the HTTP API router over the given license store.
pub fn build_router(store: Arc<LicenseStore>) -> Router {
    let routes = Router::new()
        .route("/api/verify", post(verify_handler))
        .route("/health", get(health_handler))
        .with_state(store);
    with_middleware(routes)
}

/// Wrap `router` in request tracing and the panic boundary.
///
/// A panic in any handler becomes a `server_error` response and the
/// process keeps serving.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
