//! Common implementations and shared functionality for the accrypt library
//!
//! This crate provides the zeroizing containers every other crate uses for
//! key bytes, IVs and chaining registers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};
