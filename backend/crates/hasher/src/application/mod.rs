//! Application Layer - Use Cases
//!
//! Runs the hashing primitive off the async workers and shapes its result.

pub mod config;
pub mod hash_password;
pub mod verify_password;

pub use hash_password::{HashPasswordInput, HashPasswordOutput, HashPasswordUseCase};
pub use verify_password::{VerifyPasswordInput, VerifyPasswordUseCase};
