//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, caller-selected cost)
//! - Client identification (connection peer address)

pub mod client;
pub mod password;
