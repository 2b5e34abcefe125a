//! Trait definitions for the accrypt engines

pub mod block;

pub use block::BlockCipher;
