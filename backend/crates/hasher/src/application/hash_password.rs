//! Hash Password Use Case

use crate::application::config::HasherConfig;
use crate::error::{HasherError, HasherResult, Operation};
use platform::password::{ClearTextPassword, Cost, HashedPassword, PasswordHashError};
use std::sync::Arc;

/// Input DTO for hash password
pub struct HashPasswordInput {
    pub raw: Vec<u8>,
    pub cost: i64,
}

/// Output DTO for hash password
#[derive(Debug, Clone)]
pub struct HashPasswordOutput {
    pub hash: HashedPassword,
}

/// Hash Password Use Case
pub struct HashPasswordUseCase {
    config: Arc<HasherConfig>,
}

impl HashPasswordUseCase {
    pub fn new(config: Arc<HasherConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, input: HashPasswordInput) -> HasherResult<HashPasswordOutput> {
        let cost = self.resolve_cost(input.cost).map_err(HasherError::HashFailed)?;
        let password = ClearTextPassword::new(input.raw);

        // bcrypt is CPU-bound; keep it off the async workers
        let hash = tokio::task::spawn_blocking(move || password.hash(cost))
            .await
            .map_err(|source| HasherError::TaskFailed {
                operation: Operation::Hash,
                source,
            })?
            .map_err(HasherError::HashFailed)?;

        tracing::debug!(cost = cost.get(), "Generated hash");

        Ok(HashPasswordOutput { hash })
    }

    fn resolve_cost(&self, requested: i64) -> Result<Cost, PasswordHashError> {
        if let Some(max) = self.config.max_cost {
            if requested > i64::from(max) {
                return Err(PasswordHashError::CostOutOfRange { requested, max });
            }
        }
        Cost::new(requested)
    }
}
