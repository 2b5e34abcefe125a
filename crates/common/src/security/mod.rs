//! Security primitives for handling key material
//!
//! Everything that may hold key bytes, IVs or intermediate cipher state is
//! wrapped in one of these types so it is wiped when dropped and redacted when
//! printed.

pub mod secret;

pub use secret::{SecretBuffer, SecretVec};
