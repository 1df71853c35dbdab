//! Request Middleware
//!
//! - Access log: records every request twice, when it starts (method, path,
//!   caller) and when the response is ready (same fields plus status and
//!   elapsed time). The sink is injected through the middleware state.
//! - Deadline rendering: gives the timeout layer's bare 408 the JSON envelope.

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::client::CallerAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Request line recorded by the access log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEntry {
    pub method: Method,
    pub path: String,
    pub caller: CallerAddr,
}

/// Destination for access log records
pub trait AccessLog: Send + Sync + 'static {
    fn started(&self, entry: &AccessEntry);
    fn completed(&self, entry: &AccessEntry, status: StatusCode, elapsed: Duration);
}

/// Writes access records as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn started(&self, entry: &AccessEntry) {
        tracing::info!(
            method = %entry.method,
            path = %entry.path,
            caller = %entry.caller,
            "Started"
        );
    }

    fn completed(&self, entry: &AccessEntry, status: StatusCode, elapsed: Duration) {
        tracing::info!(
            method = %entry.method,
            path = %entry.path,
            caller = %entry.caller,
            status = status.as_u16(),
            elapsed = ?elapsed,
            "Completed"
        );
    }
}

/// Middleware that wraps every route with the access log
pub async fn log_requests<L>(State(log): State<Arc<L>>, req: Request, next: Next) -> Response
where
    L: AccessLog,
{
    let entry = AccessEntry {
        method: req.method().clone(),
        path: req.uri().path().to_owned(),
        caller: CallerAddr::from_extensions(req.extensions()),
    };

    let start = Instant::now();
    log.started(&entry);

    let response = next.run(req).await;

    log.completed(&entry, response.status(), start.elapsed());
    response
}

/// Render the timeout layer's empty 408 as an error envelope
///
/// Handlers never answer 408 themselves, so the status alone identifies a
/// missed deadline.
pub async fn render_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request deadline exceeded");
    AppError::request_timeout("Request timeout").into_response()
}
