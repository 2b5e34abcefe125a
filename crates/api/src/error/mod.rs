//! Error handling for block-cipher engines
//!
//! Every failure an engine surfaces falls into one of five classes. None of
//! them carries key material, and [`Error::Integrity`] deliberately says only
//! that the ciphertext is invalid.

use thiserror::Error;

pub mod validate;


/// Primary error type for engine and backend operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Wrong parameter variant, bad key/IV size or an unsupported
    /// mode/padding combination. Raised before any backend state changes.
    #[error("invalid configuration for {context}: {message}")]
    Configuration {
        context: &'static str,
        message: String,
    },

    /// The operation needs an initialized, up-to-date engine
    #[error("{operation} not permitted: {message}")]
    State {
        operation: &'static str,
        message: &'static str,
    },

    /// Destination capacity or source span does not cover the bytes involved
    #[error("buffer too small in {context}: required {required} bytes, available {available}")]
    BufferSizing {
        context: &'static str,
        required: usize,
        available: usize,
    },

    /// Padding validation failed while finalizing a decryption
    #[error("invalid ciphertext in {context}")]
    Integrity { context: &'static str },

    /// Failure reported by the native backend itself
    #[error("backend failure in {operation}: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(context: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            context,
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state(operation: &'static str, message: &'static str) -> Self {
        Self::State { operation, message }
    }

    /// Create a backend error
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            message: message.into(),
        }
    }

    /// Create an integrity error
    pub fn integrity(context: &'static str) -> Self {
        Self::Integrity { context }
    }

    /// True for errors that guarantee no state was touched at all
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
