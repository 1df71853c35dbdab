//! Validator
//!
//! Presence and type checks over decoded form fields. No range checks:
//! the cost is handed to the primitive as requested.

use std::num::ParseIntError;

use thiserror::Error;

use super::form::FormFields;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    #[error("missing fields: {}", .missing.join(", "))]
    Missing { missing: Vec<&'static str> },

    /// Field is present but not a base-10 integer
    #[error("{field}: not an integer")]
    NotInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

/// Return the values of `names`, all present and non-empty
///
/// Every missing name is reported, not just the first.
pub fn require<const N: usize>(
    fields: &FormFields,
    names: [&'static str; N],
) -> Result<[Vec<u8>; N], ValidationError> {
    let missing: Vec<&'static str> = names
        .iter()
        .copied()
        .filter(|name| fields.get(name).is_none_or(<[u8]>::is_empty))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::Missing { missing });
    }

    Ok(names.map(|name| fields.get(name).unwrap_or_default().to_vec()))
}

/// Parse a base-10 integer with an optional sign
///
/// Bytes that are not UTF-8 become U+FFFD first, which never parses.
pub fn parse_integer(field: &'static str, value: &[u8]) -> Result<i64, ValidationError> {
    String::from_utf8_lossy(value)
        .parse::<i64>()
        .map_err(|source| ValidationError::NotInteger { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_require_present() {
        let [raw, cost] = require(&fields(&[("cost", "4"), ("raw", "s")]), ["raw", "cost"]).unwrap();
        assert_eq!(raw, b"s");
        assert_eq!(cost, b"4");
    }

    #[test]
    fn test_require_reports_all_missing() {
        let err = require(&fields(&[("raw", "")]), ["raw", "cost"]).unwrap_err();
        match err {
            ValidationError::Missing { missing } => assert_eq!(missing, vec!["raw", "cost"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_require_uses_first_value() {
        let err = require(&fields(&[("raw", ""), ("raw", "later")]), ["raw"]).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { .. }));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("cost", b"12").unwrap(), 12);
        assert_eq!(parse_integer("cost", b"+7").unwrap(), 7);
        assert_eq!(parse_integer("cost", b"-3").unwrap(), -3);

        let bad_values: [&[u8]; 7] = [
            b"abc",
            b"1.5",
            b" 4",
            b"4 ",
            b"0x10",
            b"99999999999999999999",
            b"4\xFF",
        ];
        for bad in bad_values {
            assert!(
                matches!(
                    parse_integer("cost", bad),
                    Err(ValidationError::NotInteger { field: "cost", .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
