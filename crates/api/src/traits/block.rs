//! Trait definition for stateful block-cipher engines
//!
//! The trait describes the managed side of an engine whose transforms run in
//! a native backend context. Offsets and lengths are always explicit so the
//! engine can check every span before the backend touches memory.

use crate::parameters::CipherParameters;
use crate::types::{Direction, Mode, Padding};
use crate::Result;

/// A streaming block-cipher engine.
///
/// # Lifecycle
/// An engine is constructed with a fixed mode, initialized with
/// [`init`](Self::init), fed through [`process_block`](Self::process_block) or
/// [`buffer_crypt`](Self::buffer_crypt), and finished with
/// [`do_final`](Self::do_final). [`reset`](Self::reset) prepares it for the
/// next message with the same key.
///
/// # Security Note
/// Every mutating operation takes `&mut self`; one engine is one logical
/// stream and must not be shared between threads.
pub trait BlockCipher {
    /// Configure the engine for `direction` with the supplied key material.
    ///
    /// Parameters that carry no key are rejected with
    /// [`Error::Configuration`](crate::Error::Configuration) and leave the
    /// engine exactly as it was.
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()>;

    /// Algorithm name, e.g. `"AES"`.
    fn algorithm_name(&self) -> &'static str;

    /// Cipher block size in bytes.
    fn block_size(&self) -> usize;

    /// Transform `in_len` bytes of `input` starting at `in_off` into `output`
    /// starting at `out_off`. Returns the number of bytes written.
    ///
    /// Fails with [`Error::BufferSizing`](crate::Error::BufferSizing) when the
    /// input span is out of range or `output` cannot hold the bytes this call
    /// produces; nothing is written in that case.
    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        in_len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Finish the current message, applying or validating padding.
    ///
    /// # Security Note
    /// A malformed padding on decryption surfaces only as
    /// [`Error::Integrity`](crate::Error::Integrity), with no detail about
    /// which check failed.
    fn do_final(&mut self, output: &mut [u8], out_off: usize) -> Result<usize>;

    /// Transform the input span `[input_pos, input_limit)` into `output` at
    /// `output_pos`. With `is_update` the call streams like
    /// [`process_block`](Self::process_block); otherwise it consumes the span
    /// and finishes the message like [`do_final`](Self::do_final).
    fn buffer_crypt(
        &mut self,
        input: &[u8],
        input_pos: usize,
        input_limit: usize,
        output: &mut [u8],
        output_pos: usize,
        is_update: bool,
    ) -> Result<usize>;

    /// Re-run `init` with the last direction and key, discarding any buffered
    /// partial block.
    fn reset(&mut self) -> Result<()>;

    /// Replace the managed IV. Takes effect at the next `init` or `reset`.
    fn set_iv(&mut self, iv: &[u8]);

    /// Replace the padding scheme. Takes effect at the next `init` or `reset`.
    fn set_padding(&mut self, padding: Padding) -> Result<()>;

    /// Mode fixed at construction.
    fn mode(&self) -> Mode;

    /// Managed-side padding scheme.
    fn padding(&self) -> Padding;

    /// Bytes of header the engine prefixes to its output.
    fn head_length(&self) -> usize;
}
