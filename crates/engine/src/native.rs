//! Scope-bound ownership of one native context

use core::fmt;

use tracing::{debug, warn};

use accrypt_api::{Error, Result};
use accrypt_backend::{ContextConfig, ContextHandle, NativeBackend};
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;

/// Owns a backend and at most one context allocated from it.
///
/// The context is released when the guard drops, on every exit path. Callers
/// that want to observe release failures use [`release`](Self::release)
/// instead.
pub struct NativeContext<B: NativeBackend> {
    backend: B,
    handle: Option<ContextHandle>,
}

impl<B: NativeBackend> NativeContext<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handle: None,
        }
    }

    pub fn handle(&self) -> Option<&ContextHandle> {
        self.handle.as_ref()
    }

    pub fn is_allocated(&self) -> bool {
        self.handle.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Allocate a context, or reconfigure the one already held.
    ///
    /// A context whose block size is not the AES block size is released and
    /// reported as a backend failure.
    pub fn configure(&mut self, config: &ContextConfig<'_>) -> Result<()> {
        let handle = self
            .backend
            .allocate_or_reconfigure(config, self.handle.as_ref())?;
        let block_size = self.backend.block_size(&handle);
        self.handle = Some(handle);

        match block_size {
            Ok(AES_BLOCK_SIZE) => Ok(()),
            Ok(other) => {
                self.discard("block size mismatch");
                Err(Error::backend(
                    "allocate_or_reconfigure",
                    format!("backend reported block size {}, expected {}", other, AES_BLOCK_SIZE),
                ))
            }
            Err(err) => {
                self.discard("block size query failed");
                Err(err)
            }
        }
    }

    /// Release the held context, logging rather than returning a failure
    fn discard(&mut self, reason: &'static str) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = %handle, reason, "releasing native context");
            if let Err(err) = self.backend.release(handle) {
                warn!(error = %err, reason, "failed to release native context");
            }
        }
    }

    /// Release the held context. Returns `false` when there was none.
    pub fn release(&mut self) -> Result<bool> {
        match self.handle.take() {
            Some(handle) => {
                self.backend.release(handle)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The backend together with the live handle
    pub fn parts(&self, operation: &'static str) -> Result<(&B, &ContextHandle)> {
        match self.handle.as_ref() {
            Some(handle) => Ok((&self.backend, handle)),
            None => Err(Error::state(operation, "no native context")),
        }
    }

    /// Mutable backend together with the live handle
    pub fn parts_mut(&mut self, operation: &'static str) -> Result<(&mut B, &ContextHandle)> {
        match self.handle.as_ref() {
            Some(handle) => Ok((&mut self.backend, handle)),
            None => Err(Error::state(operation, "no native context")),
        }
    }
}

impl<B: NativeBackend> Drop for NativeContext<B> {
    fn drop(&mut self) {
        self.discard("drop");
    }
}

impl<B: NativeBackend> fmt::Debug for NativeContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeContext")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
