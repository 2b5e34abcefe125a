//! Handle-addressed table of AES contexts

use std::collections::HashMap;
use std::fmt;

use tracing::trace;
use zeroize::Zeroizing;

use accrypt_api::{validate, Error, Result};
use accrypt_params::utils::backend::{DEFAULT_MAX_CONTEXTS, FIRST_CONTEXT_HANDLE};
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::context::CipherContext;
use crate::handle::{ContextConfig, ContextHandle};
use crate::NativeBackend;

/// AES backend keeping every live context in a bounded table.
///
/// Handles are never reused within one backend instance, so a stale handle
/// is reported as unknown rather than silently addressing a newer context.
pub struct AesBackend {
    contexts: HashMap<u64, CipherContext>,
    next_handle: u64,
    capacity: usize,
}

impl AesBackend {
    /// Backend with the default context limit
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONTEXTS)
    }

    /// Backend that refuses to hold more than `capacity` live contexts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contexts: HashMap::new(),
            next_handle: FIRST_CONTEXT_HANDLE,
            capacity,
        }
    }

    /// Number of contexts currently allocated
    pub fn live_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn context(&self, handle: &ContextHandle, operation: &'static str) -> Result<&CipherContext> {
        self.contexts
            .get(&handle.as_raw())
            .ok_or_else(|| unknown_handle(operation, handle))
    }

    fn context_mut(
        &mut self,
        handle: &ContextHandle,
        operation: &'static str,
    ) -> Result<&mut CipherContext> {
        self.contexts
            .get_mut(&handle.as_raw())
            .ok_or_else(|| unknown_handle(operation, handle))
    }
}

impl Default for AesBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AesBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesBackend")
            .field("live_contexts", &self.contexts.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn unknown_handle(operation: &'static str, handle: &ContextHandle) -> Error {
    Error::backend(operation, format!("unknown context handle {}", handle))
}

impl NativeBackend for AesBackend {
    fn allocate_or_reconfigure(
        &mut self,
        config: &ContextConfig<'_>,
        previous: Option<&ContextHandle>,
    ) -> Result<ContextHandle> {
        let context = CipherContext::new(config)?;
        let key_bits = context.key_bits();

        match previous {
            Some(handle) => {
                let slot = self.context_mut(handle, "allocate_or_reconfigure")?;
                // Replacing the slot drops (and wipes) the old context
                *slot = context;
                trace!(
                    handle = %handle,
                    mode = %config.mode,
                    padding = %config.padding,
                    direction = %config.direction,
                    key_bits,
                    "reconfigured native context"
                );
                Ok(handle.reissue())
            }
            None => {
                if self.contexts.len() >= self.capacity {
                    return Err(Error::backend(
                        "allocate_or_reconfigure",
                        format!("context table full ({} live)", self.capacity),
                    ));
                }
                let raw = self.next_handle;
                let handle = ContextHandle::from_raw(raw).ok_or_else(|| {
                    Error::backend("allocate_or_reconfigure", "handle space exhausted")
                })?;
                self.next_handle = raw.checked_add(1).ok_or_else(|| {
                    Error::backend("allocate_or_reconfigure", "handle space exhausted")
                })?;
                self.contexts.insert(raw, context);
                trace!(
                    handle = %handle,
                    mode = %config.mode,
                    padding = %config.padding,
                    direction = %config.direction,
                    key_bits,
                    "allocated native context"
                );
                Ok(handle)
            }
        }
    }

    fn block_size(&self, handle: &ContextHandle) -> Result<usize> {
        self.context(handle, "block_size")?;
        Ok(AES_BLOCK_SIZE)
    }

    fn transform_block(
        &mut self,
        handle: &ContextHandle,
        input: &[u8],
        in_off: usize,
        in_len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::span("transform_block input", in_off, in_len, input.len())?;
        let context = self.context_mut(handle, "transform_block")?;
        let required = context.update_len(in_len)?;
        validate::capacity("transform_block output", required, output.len(), out_off)?;

        Ok(context.update(&input[in_off..in_off + in_len], &mut output[out_off..]))
    }

    fn finalize_transform(
        &mut self,
        handle: &ContextHandle,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        let context = self.context_mut(handle, "finalize_transform")?;
        let required = context.output_len(0, true)?;
        validate::capacity("finalize_transform output", required, output.len(), out_off)?;

        let mut scratch = context.clone();
        let mut staged = Zeroizing::new(vec![0u8; required]);
        let written = scratch.finalize(&mut staged[..])?;

        output[out_off..out_off + written].copy_from_slice(&staged[..written]);
        *context = scratch;
        Ok(written)
    }

    fn buffer_transform(
        &mut self,
        handle: &ContextHandle,
        input: &[u8],
        in_pos: usize,
        in_limit: usize,
        output: &mut [u8],
        out_pos: usize,
        is_update: bool,
    ) -> Result<usize> {
        if in_limit < in_pos {
            return Err(Error::BufferSizing {
                context: "buffer_transform input",
                required: in_pos,
                available: in_limit,
            });
        }
        let in_len = in_limit - in_pos;
        validate::span("buffer_transform input", in_pos, in_len, input.len())?;
        let data = &input[in_pos..in_limit];

        let context = self.context_mut(handle, "buffer_transform")?;
        let update_len = context.update_len(in_len)?;

        if is_update {
            validate::capacity("buffer_transform output", update_len, output.len(), out_pos)?;
            return Ok(context.update(data, &mut output[out_pos..]));
        }

        let required = context.output_len(in_len, true)?;
        validate::capacity("buffer_transform output", required, output.len(), out_pos)?;

        let mut scratch = context.clone();
        let mut staged = Zeroizing::new(vec![0u8; required]);
        let updated = scratch.update(data, &mut staged[..]);
        let finished = scratch.finalize(&mut staged[updated..])?;
        let written = updated + finished;

        output[out_pos..out_pos + written].copy_from_slice(&staged[..written]);
        *context = scratch;
        Ok(written)
    }

    fn output_len(&self, handle: &ContextHandle, in_len: usize, finalize: bool) -> Result<usize> {
        self.context(handle, "output_len")?
            .output_len(in_len, finalize)
    }

    fn release(&mut self, handle: ContextHandle) -> Result<()> {
        let context = self
            .contexts
            .remove(&handle.as_raw())
            .ok_or_else(|| unknown_handle("release", &handle))?;
        trace!(
            handle = %handle,
            mode = %context.mode(),
            padding = %context.padding(),
            direction = %context.direction(),
            "released native context"
        );
        Ok(())
    }
}
