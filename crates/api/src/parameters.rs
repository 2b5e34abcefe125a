//! Cipher parameter family
//!
//! Engines accept a closed set of parameter shapes. Matching on
//! [`CipherParameters`] is exhaustive, so a new shape cannot be passed to an
//! engine that does not know how to handle it.

use accrypt_common::SecretVec;

/// Raw symmetric key bytes
///
/// Immutable once constructed; the bytes are wiped when the last copy drops.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyParameter {
    key: SecretVec,
}

impl KeyParameter {
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: SecretVec::from_slice(key),
        }
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl From<Vec<u8>> for KeyParameter {
    fn from(key: Vec<u8>) -> Self {
        Self {
            key: SecretVec::new(key),
        }
    }
}

/// Initialization vector bytes
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IvParameter {
    iv: SecretVec,
}

impl IvParameter {
    pub fn new(iv: &[u8]) -> Self {
        Self {
            iv: SecretVec::from_slice(iv),
        }
    }

    pub fn iv(&self) -> &[u8] {
        self.iv.as_slice()
    }

    pub fn len(&self) -> usize {
        self.iv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iv.is_empty()
    }
}

impl From<Vec<u8>> for IvParameter {
    fn from(iv: Vec<u8>) -> Self {
        Self {
            iv: SecretVec::new(iv),
        }
    }
}

/// Parameters accepted by [`BlockCipher::init`](crate::BlockCipher::init)
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CipherParameters {
    /// Key only; the engine uses whatever IV it already manages
    Key(KeyParameter),
    /// Key plus the IV for this initialization
    KeyWithIv { key: KeyParameter, iv: IvParameter },
    /// An IV on its own. Not a key, so `init` rejects it.
    Iv(IvParameter),
}

impl CipherParameters {
    /// Shorthand for `KeyWithIv`
    pub fn with_iv(key: KeyParameter, iv: IvParameter) -> Self {
        Self::KeyWithIv { key, iv }
    }

    /// The key carried by this value, if any
    pub fn key(&self) -> Option<&KeyParameter> {
        match self {
            Self::Key(key) | Self::KeyWithIv { key, .. } => Some(key),
            Self::Iv(_) => None,
        }
    }

    /// The IV carried by this value, if any
    pub fn iv(&self) -> Option<&IvParameter> {
        match self {
            Self::KeyWithIv { iv, .. } | Self::Iv(iv) => Some(iv),
            Self::Key(_) => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Key(_) => "KeyParameter",
            Self::KeyWithIv { .. } => "ParametersWithIV",
            Self::Iv(_) => "IvParameter",
        }
    }
}

impl From<KeyParameter> for CipherParameters {
    fn from(key: KeyParameter) -> Self {
        Self::Key(key)
    }
}

impl From<IvParameter> for CipherParameters {
    fn from(iv: IvParameter) -> Self {
        Self::Iv(iv)
    }
}
