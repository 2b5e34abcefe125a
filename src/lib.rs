//! # accrypt
//!
//! An AES block-cipher engine whose transforms run in an accelerated backend
//! behind an opaque, exclusively owned context handle.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! accrypt = "0.3"
//! ```
//!
//! ```
//! use accrypt::prelude::*;
//!
//! let key = KeyParameter::new(&[0x2b; 16]);
//! let iv = IvParameter::new(&[0u8; 16]);
//!
//! let mut enc = BlockCipherEngine::from_spec("AES/CBC/PKCS5Padding".parse()?);
//! enc.init(Direction::Encrypt, CipherParameters::with_iv(key.clone(), iv.clone()))?;
//! let mut ct = [0u8; 32];
//! let n = enc.buffer_crypt(b"attack at dawn", 0, 14, &mut ct, 0, false)?;
//!
//! let mut dec = BlockCipherEngine::from_spec("AES/CBC/PKCS5Padding".parse()?);
//! dec.init(Direction::Decrypt, CipherParameters::with_iv(key, iv))?;
//! let mut pt = [0u8; 32];
//! let m = dec.buffer_crypt(&ct, 0, n, &mut pt, 0, false)?;
//! assert_eq!(&pt[..m], b"attack at dawn");
//!
//! // Frees the native context now instead of at drop
//! enc.release()?;
//! # Ok::<(), accrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for `Mode`, `Padding`, `Direction`
//!   and `CipherSpec`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`accrypt-api`]: error taxonomy, parameters and the `BlockCipher` trait
//! - [`accrypt-common`]: zeroizing secret containers
//! - [`accrypt-internal`]: constant-time helpers
//! - [`accrypt-params`]: AES and backend constants
//! - [`accrypt-backend`]: the native backend trait and the AES backend
//! - [`accrypt-engine`]: the managed engine

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use accrypt_api as api;
pub use accrypt_backend as backend;
pub use accrypt_common as common;
pub use accrypt_engine as engine;
pub use accrypt_internal as internal;
pub use accrypt_params as params;

// Callers wiping their own buffers use the same zeroize as the library
pub use zeroize;

/// Common imports for accrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and configuration
    pub use crate::api::{
        BlockCipher, CipherParameters, Direction, IvParameter, KeyParameter, Mode, Padding,
    };

    // Engine and backend
    pub use crate::backend::{AesBackend, NativeBackend};
    pub use crate::engine::{BlockCipherEngine, CipherSpec, EngineState};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec};
}
