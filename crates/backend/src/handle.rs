//! Opaque context handles and the configuration used to create them

use core::fmt;
use core::num::NonZeroU64;

use accrypt_api::{Direction, Mode, Padding};

/// Opaque reference to a context owned by a backend.
///
/// Deliberately neither `Clone` nor `Copy`: exactly one owner may address a
/// context at a time, and releasing it consumes the handle.
#[derive(PartialEq, Eq, Hash)]
pub struct ContextHandle(NonZeroU64);

impl ContextHandle {
    /// Wrap a raw handle value. Zero means "no context" and yields `None`.
    ///
    /// Only backends should mint handles.
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// A second handle to the same context, for the backend to return from
    /// an in-place reconfiguration
    pub(crate) fn reissue(&self) -> Self {
        Self(self.0)
    }

    /// The raw handle value, never zero
    pub fn as_raw(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextHandle({})", self.0)
    }
}

impl fmt::Display for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// Everything a backend needs to set up a context
#[derive(Clone, Copy)]
pub struct ContextConfig<'a> {
    pub key: &'a [u8],
    pub direction: Direction,
    pub mode: Mode,
    pub padding: Padding,
    pub iv: Option<&'a [u8]>,
}

impl fmt::Debug for ContextConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextConfig")
            .field("key_bits", &(self.key.len() * 8))
            .field("direction", &self.direction)
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("iv", &self.iv.map(|_| "[REDACTED]"))
            .finish()
    }
}
