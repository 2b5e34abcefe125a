//! Constant values for accrypt cryptographic operations
//!
//! This library provides the constants shared by the API, backend and engine
//! crates so that sizes are defined in exactly one place.

#![no_std]

pub mod utils;
