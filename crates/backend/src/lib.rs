//! Accelerated AES backend for the accrypt engine
//!
//! The backend owns native cipher contexts (key schedule, chaining register,
//! partial-block buffer) and hands callers an opaque [`ContextHandle`] for
//! each one. Engines drive it exclusively through the [`NativeBackend`] trait.
//!
//! [`AesBackend`] is built on the `aes` crate, which selects AES-NI or the
//! ARMv8 crypto extensions at runtime and falls back to a constant-time
//! bitsliced implementation elsewhere.

#![forbid(unsafe_code)]

mod aes_backend;
mod cipher;
mod context;
mod handle;
mod modes;
mod padding;

pub use aes_backend::AesBackend;
pub use handle::{ContextConfig, ContextHandle};

use accrypt_api::Result;

/// Primitive operations of a native crypto backend.
///
/// Offsets are explicit so every call can be checked against the slices it
/// touches. A handle is only meaningful to the backend that issued it.
pub trait NativeBackend {
    /// Allocate a new context, or reconfigure `previous` in place.
    ///
    /// Reconfiguration keeps the handle value and wipes the old context.
    fn allocate_or_reconfigure(
        &mut self,
        config: &ContextConfig<'_>,
        previous: Option<&ContextHandle>,
    ) -> Result<ContextHandle>;

    /// Block size of the cipher behind `handle`.
    fn block_size(&self, handle: &ContextHandle) -> Result<usize>;

    /// Update the context with `input[in_off..in_off + in_len]`, writing to
    /// `output` from `out_off`. Returns the bytes written.
    fn transform_block(
        &mut self,
        handle: &ContextHandle,
        input: &[u8],
        in_off: usize,
        in_len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Finish the message: emit or strip padding and rewind the context to
    /// its freshly configured state.
    fn finalize_transform(
        &mut self,
        handle: &ContextHandle,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Transform `input[in_pos..in_limit]` into `output` from `out_pos`.
    /// When `is_update` is false the message is also finished.
    #[allow(clippy::too_many_arguments)]
    fn buffer_transform(
        &mut self,
        handle: &ContextHandle,
        input: &[u8],
        in_pos: usize,
        in_limit: usize,
        output: &mut [u8],
        out_pos: usize,
        is_update: bool,
    ) -> Result<usize>;

    /// Upper bound on the bytes the next call writes for `in_len` input
    /// bytes. With `finalize` the bound covers finishing the message too.
    fn output_len(&self, handle: &ContextHandle, in_len: usize, finalize: bool) -> Result<usize>;

    /// Free the context behind `handle`. The handle is consumed.
    fn release(&mut self, handle: ContextHandle) -> Result<()>;
}
