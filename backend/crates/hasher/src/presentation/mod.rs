//! Presentation Layer
//!
//! Form decoding, validation, HTTP handlers and the access log.

pub mod dto;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod validate;
