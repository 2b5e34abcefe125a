//! Configuration types shared by engines and backends

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction of a configured cipher context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// True when the context encrypts
    pub fn is_encrypt(self) -> bool {
        matches!(self, Direction::Encrypt)
    }
}

impl From<bool> for Direction {
    /// `true` selects encryption, matching the `forEncryption` flag of
    /// JCE-style engines
    fn from(for_encryption: bool) -> Self {
        if for_encryption {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Block-cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Electronic codebook, no IV
    Ecb,
    /// Cipher block chaining with a 16-byte IV
    Cbc,
    /// Counter mode, the IV is the initial 128-bit counter block
    Ctr,
}

impl Mode {
    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ctr => "CTR",
        }
    }

    /// Whether `init` must be given an IV
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Stream modes emit exactly as many bytes as they consume
    pub fn is_stream(self) -> bool {
        matches!(self, Mode::Ctr)
    }

    /// Whether the mode can honour `padding`
    pub fn supports(self, padding: Padding) -> bool {
        match padding {
            Padding::NoPadding => true,
            Padding::Pkcs5Padding => !self.is_stream(),
        }
    }

    /// Reject combinations the mode cannot honour
    pub fn check_padding(self, padding: Padding) -> Result<()> {
        if self.supports(padding) {
            Ok(())
        } else {
            Err(Error::config(
                "cipher configuration",
                format!("{} mode does not support {}", self, padding),
            ))
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            "CTR" => Ok(Mode::Ctr),
            other => Err(Error::config("mode", format!("unsupported mode {:?}", other))),
        }
    }
}

/// Padding scheme applied at finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Padding {
    #[default]
    NoPadding,
    Pkcs5Padding,
}

impl Padding {
    /// Canonical JCE name
    pub fn name(self) -> &'static str {
        match self {
            Padding::NoPadding => "NoPadding",
            Padding::Pkcs5Padding => "PKCS5Padding",
        }
    }

    pub fn is_padded(self) -> bool {
        matches!(self, Padding::Pkcs5Padding)
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // PKCS#7 on 16-byte blocks is byte-for-byte what JCE calls PKCS5
        match s.trim().to_ascii_uppercase().as_str() {
            "NOPADDING" => Ok(Padding::NoPadding),
            "PKCS5PADDING" | "PKCS7PADDING" => Ok(Padding::Pkcs5Padding),
            other => Err(Error::config(
                "padding",
                format!("unsupported padding {:?}", other),
            )),
        }
    }
}
