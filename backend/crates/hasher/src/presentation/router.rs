//! Hasher Router

use crate::application::config::HasherConfig;
use crate::presentation::handlers::{self, HasherAppState};
use crate::presentation::middleware::{AccessLog, TracingAccessLog, log_requests, render_timeout};
use axum::http::StatusCode;
use axum::{Router, middleware, routing::any};
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;

/// Create the hasher router logging through `tracing`
pub fn hasher_router(config: HasherConfig) -> Router {
    hasher_router_with_log(config, TracingAccessLog)
}

/// Create the hasher router with an explicit access log sink
///
/// Layers, outermost first: access log, timeout rendering, deadline.
pub fn hasher_router_with_log<L>(config: HasherConfig, log: L) -> Router
where
    L: AccessLog,
{
    let deadline = TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout);
    let state = HasherAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/hash", any(handlers::hash_password))
        .route("/verify", any(handlers::verify_password))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(deadline)
        .layer(middleware::map_response(render_timeout))
        .layer(middleware::from_fn_with_state(
            Arc::new(log),
            log_requests::<L>,
        ))
}
