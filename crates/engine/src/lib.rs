//! Stateful AES block-cipher engine
//!
//! [`BlockCipherEngine`] validates configuration, owns exactly one native
//! context through a [`NativeContext`] guard, and exposes the block- and
//! buffer-oriented transforms of [`accrypt_api::BlockCipher`].
//!
//! ```
//! use accrypt_api::{BlockCipher, CipherParameters, Direction, IvParameter, KeyParameter};
//! use accrypt_engine::{BlockCipherEngine, CipherSpec};
//!
//! let spec: CipherSpec = "AES/CBC/PKCS5Padding".parse()?;
//! let mut engine = BlockCipherEngine::from_spec(spec);
//! engine.init(
//!     Direction::Encrypt,
//!     CipherParameters::with_iv(KeyParameter::new(&[0u8; 16]), IvParameter::new(&[0u8; 16])),
//! )?;
//!
//! let mut out = [0u8; 16];
//! let n = engine.buffer_crypt(b"hello", 0, 5, &mut out, 0, false)?;
//! assert_eq!(n, 16);
//! # Ok::<(), accrypt_api::Error>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod engine;
mod native;
mod state;

pub use config::CipherSpec;
pub use engine::BlockCipherEngine;
pub use native::NativeContext;
pub use state::EngineState;
