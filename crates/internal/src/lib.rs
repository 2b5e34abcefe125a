//! Internal utilities for the accrypt library
//!
//! Nothing in here is part of the public contract; the helpers exist so that
//! padding and key comparisons share one constant-time implementation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_u8, ct_in_range_u8};
