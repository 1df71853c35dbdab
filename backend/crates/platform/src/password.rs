//! Password Hashing and Verification
//!
//! Thin wrapper over bcrypt with:
//! - Caller-selected work factor ([`Cost`])
//! - Zeroization of the clear text secret
//! - Constant-time comparison (inside bcrypt)
//! - No silent truncation of secrets longer than 72 bytes
//!
//! Hash strings are emitted with the `$2a$` version prefix and treated as
//! opaque everywhere else in the service.

use std::fmt;

use bcrypt::{BcryptError, Version};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Cost used when the caller asks for less than [`MIN_COST`]
pub const DEFAULT_COST: u32 = 10;

/// bcrypt only reads the first 72 bytes of a secret
pub const MAX_PASSWORD_BYTES: usize = 72;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Requested cost is above what the algorithm supports (or above a
    /// configured ceiling)
    #[error("Cost {requested} is outside the accepted range (max {max})")]
    CostOutOfRange { requested: i64, max: u32 },

    /// Secret is longer than bcrypt can process
    #[error("Password is {len} bytes, at most {max} are accepted", max = MAX_PASSWORD_BYTES)]
    PasswordTooLong { len: usize },

    /// Caller-supplied hash string the primitive could not use
    ///
    /// Holds a fixed reason only: bcrypt's own error text quotes the hash.
    #[error("Malformed hash: {reason}")]
    MalformedHash { reason: &'static str },

    /// Error reported by the bcrypt primitive while hashing
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),
}

impl PasswordHashError {
    fn malformed(err: BcryptError) -> Self {
        let reason = match err {
            BcryptError::InvalidHash(_) => "unrecognized hash format",
            BcryptError::InvalidPrefix(_) => "unsupported version prefix",
            BcryptError::InvalidCost(_) => "invalid cost field",
            BcryptError::InvalidSaltLen(_) => "invalid salt length",
            BcryptError::InvalidBase64(_) => "invalid base64",
            _ => "rejected by bcrypt",
        };
        PasswordHashError::MalformedHash { reason }
    }
}

// ============================================================================
// Cost
// ============================================================================

/// bcrypt work factor (iteration count is `2^cost`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost(u32);

impl Cost {
    /// Resolve a caller-requested cost
    ///
    /// Values below [`MIN_COST`] fall back to [`DEFAULT_COST`]; values above
    /// [`MAX_COST`] are rejected.
    pub fn new(requested: i64) -> Result<Self, PasswordHashError> {
        if requested < i64::from(MIN_COST) {
            return Ok(Self(DEFAULT_COST));
        }
        if requested > i64::from(MAX_COST) {
            return Err(PasswordHashError::CostOutOfRange {
                requested,
                max: MAX_COST,
            });
        }
        Ok(Self(requested as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text secret with automatic memory zeroization
///
/// Held as bytes, exactly as decoded from the request; no UTF-8
/// requirement. Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(Vec<u8>);

impl ClearTextPassword {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn check_length(&self) -> Result<(), PasswordHashError> {
        let len = self.as_bytes().len();
        if len > MAX_PASSWORD_BYTES {
            return Err(PasswordHashError::PasswordTooLong { len });
        }
        Ok(())
    }

    /// Hash the secret with a fresh random salt
    ///
    /// CPU-bound: the running time doubles with every cost step.
    pub fn hash(&self, cost: Cost) -> Result<HashedPassword, PasswordHashError> {
        self.check_length()?;

        let parts = bcrypt::hash_with_result(self.as_bytes(), cost.get())?;

        Ok(HashedPassword {
            hash: parts.format_for_version(Version::TwoA),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password
// ============================================================================

/// bcrypt hash string (`$2a$<cost>$<salt><digest>`)
///
/// Opaque: the string is never parsed here, only handed to bcrypt.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a caller-supplied hash string without validating it
    pub fn from_hash_string(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a secret against this hash
    ///
    /// Returns `Ok(false)` on mismatch and an error when the hash string is
    /// malformed or the secret cannot be processed.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        password.check_length()?;
        bcrypt::verify(password.as_bytes(), &self.hash).map_err(PasswordHashError::malformed)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
