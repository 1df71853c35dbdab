//! Verify Password Use Case

use crate::error::{HasherError, HasherResult, Operation, Rejection};
use platform::password::{ClearTextPassword, HashedPassword};

/// Input DTO for verify password
pub struct VerifyPasswordInput {
    pub raw: Vec<u8>,
    pub hash: String,
}

/// Verify Password Use Case
///
/// A mismatch and a malformed hash both surface as
/// [`HasherError::InvalidPassword`].
#[derive(Debug, Default)]
pub struct VerifyPasswordUseCase;

impl VerifyPasswordUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, input: VerifyPasswordInput) -> HasherResult<()> {
        let password = ClearTextPassword::new(input.raw);
        let hashed = HashedPassword::from_hash_string(input.hash);

        let matched = tokio::task::spawn_blocking(move || hashed.verify(&password))
            .await
            .map_err(|source| HasherError::TaskFailed {
                operation: Operation::Verify,
                source,
            })?
            .map_err(Rejection::from)?;

        if !matched {
            return Err(Rejection::Mismatch.into());
        }
        Ok(())
    }
}
