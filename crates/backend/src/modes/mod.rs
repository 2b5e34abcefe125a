//! Chaining modes over the AES block primitive
//!
//! Block modes (ECB, CBC) transform one whole block at a time; CTR is a
//! keystream and accepts any number of bytes.

pub(crate) mod cbc;
pub(crate) mod ctr;
pub(crate) mod ecb;
