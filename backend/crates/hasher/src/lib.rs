//! Hasher Backend Module
//!
//! Two endpoints over the bcrypt primitive:
//! - `POST /hash`   - derive a salted hash at a caller-selected cost
//! - `POST /verify` - check a secret against a previously issued hash
//!
//! Layered structure:
//! - `application/` - Use cases (primitive invocation on the blocking pool)
//! - `presentation/` - Form decoding, validation, handlers, access log, router
//!
//! ## Security Model
//! - Secrets and hash strings are never logged
//! - Primitive failures are reported with a fixed message; causes stay in server logs
//! - Verify does not distinguish a wrong secret from a malformed hash

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::HasherConfig;
pub use error::{HasherError, HasherResult, Operation};
pub use presentation::middleware::{AccessEntry, AccessLog, TracingAccessLog};
pub use presentation::router::{hasher_router, hasher_router_with_log};
