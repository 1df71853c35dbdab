//! Validated request parameters

use std::fmt;

use super::form::FormFields;
use super::validate::{ValidationError, parse_integer, require};

/// Fields of POST /hash
pub struct HashRequest {
    pub raw: Vec<u8>,
    pub cost: i64,
}

impl TryFrom<&FormFields> for HashRequest {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        let [raw, cost] = require(fields, ["raw", "cost"])?;
        let cost = parse_integer("cost", &cost)?;
        Ok(Self { raw, cost })
    }
}

impl fmt::Debug for HashRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRequest")
            .field("raw", &"[REDACTED]")
            .field("cost", &self.cost)
            .finish()
    }
}

/// Fields of POST /verify
pub struct VerifyRequest {
    pub raw: Vec<u8>,
    pub hash: String,
}

impl TryFrom<&FormFields> for VerifyRequest {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        let [raw, hash] = require(fields, ["raw", "hash"])?;
        // A hash that is not UTF-8 cannot be a bcrypt hash; the substituted
        // U+FFFD keeps it malformed.
        let hash = String::from_utf8_lossy(&hash).into_owned();
        Ok(Self { raw, hash })
    }
}

impl fmt::Debug for VerifyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyRequest")
            .field("raw", &"[REDACTED]")
            .field("hash", &"[HASH]")
            .finish()
    }
}
