//! Response Envelope
//!
//! Every endpoint answers with the same JSON body:
//! `{"success": bool, "data"?: string, "error"?: string}`.
//! `data` and `error` are omitted when empty.

use serde::{Deserialize, Serialize};

/// JSON body shared by all responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Serialize to a newline-terminated JSON document
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut body = serde_json::to_vec(self)?;
        body.push(b'\n');
        Ok(body)
    }
}

/// Result of one operation, consumed immediately by the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success with an optional opaque payload
    Success(Option<String>),
    /// Failure with a short human-readable message
    Failure(String),
}

impl Outcome {
    pub fn success() -> Self {
        Outcome::Success(None)
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Outcome::Success(Some(data.into()))
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }
}

impl From<Outcome> for ApiResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success(data) => ApiResponse {
                success: true,
                data: data.filter(|d| !d.is_empty()),
                error: None,
            },
            Outcome::Failure(message) => ApiResponse {
                success: false,
                data: None,
                error: Some(message).filter(|m| !m.is_empty()),
            },
        }
    }
}

#[cfg(feature = "axum")]
pub use self::reply::ApiReply;

#[cfg(feature = "axum")]
mod reply {
    use super::{ApiResponse, Outcome};
    use axum::http::{HeaderValue, StatusCode, header};
    use axum::response::{IntoResponse, Response};

    /// An [`Outcome`] paired with the status code it is sent under
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ApiReply {
        pub status: StatusCode,
        pub outcome: Outcome,
    }

    impl ApiReply {
        pub fn new(status: StatusCode, outcome: Outcome) -> Self {
            Self { status, outcome }
        }

        /// 200 OK carrying `outcome`
        pub fn ok(outcome: Outcome) -> Self {
            Self::new(StatusCode::OK, outcome)
        }
    }

    impl IntoResponse for ApiReply {
        fn into_response(self) -> Response {
            // The status is committed before the body is produced, so an
            // encoding failure can only be logged.
            let body = match ApiResponse::from(self.outcome).to_body() {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(error = %e, "Error encoding response");
                    Vec::new()
                }
            };

            (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_without_payload_omits_fields() {
        let body = ApiResponse::from(Outcome::success()).to_body().unwrap();
        assert_eq!(body, b"{\"success\":true}\n");
    }

    #[test]
    fn test_success_with_payload() {
        let resp = ApiResponse::from(Outcome::with_data("$2a$04$abc"));
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"success":true,"data":"$2a$04$abc"}"#
        );
    }

    #[test]
    fn test_empty_strings_are_omitted() {
        let resp = ApiResponse::from(Outcome::with_data(""));
        assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"success":true}"#);

        let resp = ApiResponse::from(Outcome::failure(""));
        assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"success":false}"#);
    }

    #[test]
    fn test_failure_carries_error_only() {
        let resp = ApiResponse::from(Outcome::failure("Invalid cost"));
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"success":false,"error":"Invalid cost"}"#
        );
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_reply_sets_status_and_content_type() {
        use axum::body::to_bytes;
        use axum::http::{StatusCode, header};
        use axum::response::IntoResponse;

        let response = ApiReply::ok(Outcome::success()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"{\"success\":true}\n");
    }
}
