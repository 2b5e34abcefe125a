//! AES key schedule wrapper

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use accrypt_api::{validate, Result};
use accrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_KEY_SIZES,
};

/// Expanded AES key for one of the three key sizes.
///
/// The `aes` crate zeroizes its round keys on drop.
#[derive(Clone)]
pub(crate) enum AesKey {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesKey {
    pub(crate) fn new(key: &[u8]) -> Result<Self> {
        validate::parameter(
            AES_KEY_SIZES.contains(&key.len()),
            "AES key",
            "key must be 16, 24 or 32 bytes",
        )?;

        // Length checked above, so new_from_slice cannot fail
        let invalid = |_| accrypt_api::Error::config("AES key", "invalid key length");
        Ok(match key.len() {
            AES128_KEY_SIZE => AesKey::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            AES192_KEY_SIZE => AesKey::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            _ => AesKey::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
        })
    }

    pub(crate) fn key_bits(&self) -> usize {
        match self {
            AesKey::Aes128(_) => AES128_KEY_SIZE * 8,
            AesKey::Aes192(_) => AES192_KEY_SIZE * 8,
            AesKey::Aes256(_) => AES256_KEY_SIZE * 8,
        }
    }

    pub(crate) fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = Block::from_mut_slice(block);
        match self {
            AesKey::Aes128(c) => c.encrypt_block(block),
            AesKey::Aes192(c) => c.encrypt_block(block),
            AesKey::Aes256(c) => c.encrypt_block(block),
        }
    }

    pub(crate) fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = Block::from_mut_slice(block);
        match self {
            AesKey::Aes128(c) => c.decrypt_block(block),
            AesKey::Aes192(c) => c.decrypt_block(block),
            AesKey::Aes256(c) => c.decrypt_block(block),
        }
    }
}
