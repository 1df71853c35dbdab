//! Hasher Error Types
//!
//! This module provides hasher-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! `Display` carries the detailed cause for server logs; the caller only
//! ever sees [`HasherError::public_message`].

use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::presentation::form::DecodeError;
use crate::presentation::validate::ValidationError;

/// Hasher-specific result type alias
pub type HasherResult<T> = Result<T, HasherError>;

/// The two operations the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Hash,
    Verify,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Hash => "hash",
            Operation::Verify => "verify",
        }
    }

    fn missing_params_message(&self) -> &'static str {
        match self {
            Operation::Hash => "Missing raw or cost params",
            Operation::Verify => "Missing raw or hash params",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a verify request was rejected
#[derive(Debug, Error)]
pub enum Rejection {
    /// Well-formed hash, different secret
    #[error("password does not match")]
    Mismatch,

    /// Malformed hash string or a secret the primitive refuses
    #[error(transparent)]
    Primitive(#[from] PasswordHashError),
}

/// Hasher-specific error variants
#[derive(Debug, Error)]
pub enum HasherError {
    /// Anything but POST
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    /// Query string or form body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DecodeError),

    /// Required field missing or malformed
    #[error("Invalid {operation} params: {source}")]
    Validation {
        operation: Operation,
        #[source]
        source: ValidationError,
    },

    /// Primitive failed to produce a hash
    #[error("Hash generation failed: {0}")]
    HashFailed(#[source] PasswordHashError),

    /// Secret and hash did not verify
    #[error("Password rejected: {0}")]
    InvalidPassword(#[from] Rejection),

    /// Blocking task running the primitive panicked or was cancelled
    #[error("{operation} task failed: {source}")]
    TaskFailed {
        operation: Operation,
        #[source]
        source: JoinError,
    },
}

impl HasherError {
    pub fn validation(operation: Operation, source: ValidationError) -> Self {
        HasherError::Validation { operation, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HasherError::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            HasherError::InvalidRequest(_)
            | HasherError::Validation { .. }
            | HasherError::InvalidPassword(_) => ErrorKind::BadRequest,
            HasherError::HashFailed(_) | HasherError::TaskFailed { .. } => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message sent to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            HasherError::MethodNotAllowed(_) => "Method not allowed",
            HasherError::InvalidRequest(_) => "Invalid request",
            HasherError::Validation { operation, source } => match source {
                ValidationError::Missing { .. } => operation.missing_params_message(),
                ValidationError::NotInteger { .. } => "Invalid cost",
            },
            HasherError::HashFailed(_) => "Failed to generate hash",
            HasherError::InvalidPassword(_) => "Invalid password",
            HasherError::TaskFailed { operation, .. } => match operation {
                Operation::Hash => "Failed to generate hash",
                Operation::Verify => "Internal server error",
            },
        }
    }

    /// Log the error with appropriate level
    ///
    /// No variant's `Display` quotes a secret or a caller-supplied hash.
    fn log(&self) {
        match self {
            HasherError::InvalidPassword(reason) => {
                tracing::debug!(reason = %reason, "Password rejected");
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }
    }
}

impl From<HasherError> for AppError {
    fn from(err: HasherError) -> Self {
        let kind = err.kind();
        let message = err.public_message();
        AppError::new(kind, message).with_source(err)
    }
}

impl IntoResponse for HasherError {
    fn into_response(self) -> Response {
        self.log();
        let method_not_allowed = matches!(self, HasherError::MethodNotAllowed(_));

        let mut response = AppError::from(self).into_response();
        if method_not_allowed {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::Cost;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            HasherError::MethodNotAllowed(Method::GET).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            HasherError::InvalidPassword(Rejection::Mismatch).status_code(),
            StatusCode::BAD_REQUEST
        );

        let cost_err = Cost::new(99).unwrap_err();
        assert_eq!(
            HasherError::HashFailed(cost_err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_params_message_per_operation() {
        let missing = || ValidationError::Missing {
            missing: vec!["raw"],
        };
        assert_eq!(
            HasherError::validation(Operation::Hash, missing()).public_message(),
            "Missing raw or cost params"
        );
        assert_eq!(
            HasherError::validation(Operation::Verify, missing()).public_message(),
            "Missing raw or hash params"
        );
    }

    #[test]
    fn test_cause_is_not_public() {
        let err = HasherError::HashFailed(Cost::new(40).unwrap_err());
        assert!(err.to_string().contains("40"));
        assert_eq!(err.public_message(), "Failed to generate hash");

        let app_err = AppError::from(err);
        assert_eq!(app_err.message(), "Failed to generate hash");
        assert_eq!(app_err.status_code(), 500);
    }
}
