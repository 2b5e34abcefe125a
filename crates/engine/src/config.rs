//! Transformation strings such as `AES/CBC/PKCS5Padding`

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use accrypt_api::{Error, Mode, Padding, Result};
use accrypt_params::utils::symmetric::AES_ALGORITHM_NAME;

/// A validated mode and padding pair.
///
/// Invalid pairs are rejected here, before any backend context exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CipherSpec {
    mode: Mode,
    padding: Padding,
}

impl CipherSpec {
    pub fn new(mode: Mode, padding: Padding) -> Result<Self> {
        mode.check_padding(padding)?;
        Ok(Self { mode, padding })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl From<Mode> for CipherSpec {
    /// Every mode accepts `NoPadding`
    fn from(mode: Mode) -> Self {
        Self {
            mode,
            padding: Padding::NoPadding,
        }
    }
}

impl FromStr for CipherSpec {
    type Err = Error;

    /// Accepts `AES/<mode>/<padding>`, `<mode>/<padding>` or `<mode>`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts: Vec<&str> = s.split('/').map(str::trim).collect();
        if parts
            .first()
            .map_or(false, |p| p.eq_ignore_ascii_case(AES_ALGORITHM_NAME))
        {
            parts.remove(0);
        }

        match parts.as_slice() {
            [mode] => Ok(Self::from(mode.parse::<Mode>()?)),
            [mode, padding] => Self::new(mode.parse()?, padding.parse()?),
            _ => Err(Error::config(
                "transformation",
                format!("cannot parse {:?}", s),
            )),
        }
    }
}

impl fmt::Display for CipherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", AES_ALGORITHM_NAME, self.mode, self.padding)
    }
}

impl TryFrom<String> for CipherSpec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CipherSpec> for String {
    fn from(spec: CipherSpec) -> Self {
        spec.to_string()
    }
}
