//! Application Configuration

use std::time::Duration;

/// Largest form body read by the request decoder (10 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 << 20;

/// Deadline for reading a request and producing its response
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Hasher application configuration
#[derive(Debug, Clone)]
pub struct HasherConfig {
    /// Optional ceiling on the requested cost, below the primitive's own
    /// maximum. `None` accepts every cost the primitive accepts.
    pub max_cost: Option<u32>,
    /// Form body size limit
    pub max_body_bytes: usize,
    /// Per-request deadline, body read included
    pub request_timeout: Duration,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            max_cost: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HasherConfig {
    pub fn with_max_cost(max_cost: Option<u32>) -> Self {
        Self {
            max_cost,
            ..Self::default()
        }
    }
}
