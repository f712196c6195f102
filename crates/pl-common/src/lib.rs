//! Process Lens shared types.
//!
//! This crate provides the types shared across pl-core modules:
//! - Process identity with an explicit invalid-pid sentinel
//! - The unified error type and `Result` alias

pub mod error;
pub mod id;

pub use error::{Error, Result};
pub use id::ProcessId;
