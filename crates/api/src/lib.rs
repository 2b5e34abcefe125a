//! Public API traits and types for the accrypt library
//!
//! This crate provides the public API surface for the accrypt ecosystem:
//! the error taxonomy, the cipher parameter family, the configuration enums
//! and the [`BlockCipher`] engine trait.

#![forbid(unsafe_code)]

pub mod error;
pub mod parameters;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use parameters::{CipherParameters, IvParameter, KeyParameter};
pub use traits::BlockCipher;
pub use types::{Direction, Mode, Padding};
