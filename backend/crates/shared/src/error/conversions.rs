//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Every error is rendered with the same JSON envelope as a successful
//! response, carrying only the public message.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::{ApiReply, Outcome};
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        ApiReply::new(status, Outcome::failure(self.message().to_owned())).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::body::to_bytes;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_into_response_renders_envelope() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "secret detail");
        let response = AppError::new(ErrorKind::InternalServerError, "Failed to generate hash")
            .with_source(io_err)
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            text,
            "{\"success\":false,\"error\":\"Failed to generate hash\"}\n"
        );
        assert!(!text.contains("secret detail"));
    }
}
