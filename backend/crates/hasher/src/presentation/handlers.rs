//! HTTP Handlers
//!
//! Both routes accept every method so that a wrong verb is answered with
//! the JSON envelope (405) before the body is touched.

use axum::extract::{Request, State};
use axum::http::Method;
use kernel::error::app_error::AppError;
use kernel::response::{ApiReply, Outcome};
use std::sync::Arc;

use crate::application::config::HasherConfig;
use crate::application::{
    HashPasswordInput, HashPasswordUseCase, VerifyPasswordInput, VerifyPasswordUseCase,
};
use crate::error::{HasherError, HasherResult, Operation};
use crate::presentation::dto::{HashRequest, VerifyRequest};
use crate::presentation::form::{FormFields, decode_form};

/// Shared state for hasher handlers
#[derive(Clone)]
pub struct HasherAppState {
    pub config: Arc<HasherConfig>,
}

/// POST /hash
pub async fn hash_password(
    State(state): State<HasherAppState>,
    request: Request,
) -> HasherResult<ApiReply> {
    let fields = accept_form(&state.config, request).await?;
    let req = HashRequest::try_from(&fields)
        .map_err(|e| HasherError::validation(Operation::Hash, e))?;

    let use_case = HashPasswordUseCase::new(state.config.clone());
    let output = use_case
        .execute(HashPasswordInput {
            raw: req.raw,
            cost: req.cost,
        })
        .await?;

    Ok(ApiReply::ok(Outcome::with_data(output.hash.into_string())))
}

/// POST /verify
pub async fn verify_password(
    State(state): State<HasherAppState>,
    request: Request,
) -> HasherResult<ApiReply> {
    let fields = accept_form(&state.config, request).await?;
    let req = VerifyRequest::try_from(&fields)
        .map_err(|e| HasherError::validation(Operation::Verify, e))?;

    VerifyPasswordUseCase::new()
        .execute(VerifyPasswordInput {
            raw: req.raw,
            hash: req.hash,
        })
        .await?;

    Ok(ApiReply::ok(Outcome::success()))
}

/// Any unrouted path
pub async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Reject non-POST requests, then decode the form
async fn accept_form(config: &HasherConfig, request: Request) -> HasherResult<FormFields> {
    if request.method() != Method::POST {
        return Err(HasherError::MethodNotAllowed(request.method().clone()));
    }

    let (parts, body) = request.into_parts();
    Ok(decode_form(&parts, body, config.max_body_bytes).await?)
}
