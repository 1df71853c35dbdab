//! Request Decoder
//!
//! Collects form fields from the body (when it is
//! `application/x-www-form-urlencoded`) and the query string, in that
//! order. Lookups return the first value, so body fields shadow query
//! fields of the same name.
//!
//! The grammar is strict: a `%` must start a two-digit hex escape and a
//! raw `;` inside a pair is rejected. Decoded values are bytes; nothing is
//! replaced when they are not UTF-8.

use std::fmt;

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, header, request::Parts};
use percent_encoding::percent_decode;
use thiserror::Error;

/// Media type whose body is parsed as form fields
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Where a malformed field came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPart {
    Query,
    Body,
}

impl fmt::Display for FormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPart::Query => f.write_str("query string"),
            FormPart::Body => f.write_str("form body"),
        }
    }
}

/// Form decoding errors
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid percent-encoding in {0}")]
    InvalidEscape(FormPart),

    #[error("invalid semicolon separator in {0}")]
    Semicolon(FormPart),

    #[error("malformed Content-Type header")]
    ContentType,

    #[error("failed to read form body: {0}")]
    Body(#[source] axum::Error),
}

type Pair = (Vec<u8>, Vec<u8>);

/// Decoded fields in arrival order
///
/// `Debug` lists field names only; values may be secrets.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<Pair>);

impl FormFields {
    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.0
            .iter()
            .find(|(key, _)| key == name.as_bytes())
            .map(|(_, value)| value.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.0.iter().map(|(key, _)| String::from_utf8_lossy(key)))
            .finish()
    }
}

/// Decode the body (if form-encoded) and the query string of a request
///
/// The body is read up to `limit` bytes; a larger body is a decode error.
pub async fn decode_form(parts: &Parts, body: Body, limit: usize) -> Result<FormFields, DecodeError> {
    let mut pairs = Vec::new();

    if is_form_body(&parts.headers)? {
        let bytes = to_bytes(body, limit).await.map_err(DecodeError::Body)?;
        pairs.extend(parse_pairs(&bytes, FormPart::Body)?);
    }

    if let Some(query) = parts.uri.query() {
        pairs.extend(parse_pairs(query.as_bytes(), FormPart::Query)?);
    }

    Ok(FormFields(pairs))
}

/// Whether the declared media type is form-urlencoded
///
/// A missing or empty header means "not a form". A present header must be
/// a well-formed media type, even when it is not a form.
fn is_form_body(headers: &HeaderMap) -> Result<bool, DecodeError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(false);
    };
    let value = value.to_str().map_err(|_| DecodeError::ContentType)?;
    if value.trim().is_empty() {
        return Ok(false);
    }

    let essence = media_type_essence(value).ok_or(DecodeError::ContentType)?;
    Ok(essence.eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// `type/subtype` of a Content-Type value, or `None` if it is malformed
///
/// Every parameter must be `name=value`; trailing semicolons are allowed.
fn media_type_essence(value: &str) -> Option<&str> {
    let mut sections = value.split(';').map(str::trim);
    let essence = sections.next().unwrap_or_default();
    let valid_type = match essence.split_once('/') {
        Some((kind, subtype)) => is_token(kind) && is_token(subtype),
        None => is_token(essence),
    };
    if !valid_type {
        return None;
    }

    let params: Vec<&str> = sections.collect();
    let used = params.iter().rposition(|p| !p.is_empty()).map_or(0, |i| i + 1);
    for param in &params[..used] {
        let (name, value) = param.split_once('=')?;
        let value = value.trim();
        let quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
        if !is_token(name.trim()) || !(quoted || is_token(value)) {
            return None;
        }
    }
    Some(essence)
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?=".contains(&b))
}

fn parse_pairs(input: &[u8], part: FormPart) -> Result<Vec<Pair>, DecodeError> {
    let mut pairs = Vec::new();
    for segment in input.split(|&b| b == b'&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(&b';') {
            return Err(DecodeError::Semicolon(part));
        }
        if !has_valid_escapes(segment) {
            return Err(DecodeError::InvalidEscape(part));
        }

        let (key, value) = match segment.iter().position(|&b| b == b'=') {
            Some(eq) => (&segment[..eq], &segment[eq + 1..]),
            None => (segment, &[][..]),
        };
        pairs.push((unescape(key), unescape(value)));
    }
    Ok(pairs)
}

/// `+` to space, then `%XX` to the byte it names
fn unescape(component: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = component
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}

fn has_valid_escapes(segment: &[u8]) -> bool {
    let mut i = 0;
    while i < segment.len() {
        if segment[i] == b'%' {
            let escape = segment.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
