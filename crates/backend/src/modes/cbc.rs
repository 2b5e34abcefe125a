//! Cipher block chaining

use accrypt_api::Direction;
use accrypt_common::SecretBuffer;
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::cipher::AesKey;

/// Transform one block in place, advancing the chaining register.
///
/// `register` holds the IV before the first block and the previous
/// ciphertext block afterwards.
pub(crate) fn crypt_block(
    cipher: &AesKey,
    direction: Direction,
    register: &mut SecretBuffer<AES_BLOCK_SIZE>,
    block: &mut [u8; AES_BLOCK_SIZE],
) {
    match direction {
        Direction::Encrypt => {
            xor_in_place(block, register.as_array());
            cipher.encrypt_block(block);
            register.as_array_mut().copy_from_slice(block);
        }
        Direction::Decrypt => {
            let saved = SecretBuffer::new(*block);
            cipher.decrypt_block(block);
            xor_in_place(block, register.as_array());
            register.copy_from(&saved);
        }
    }
}

#[inline]
fn xor_in_place(block: &mut [u8; AES_BLOCK_SIZE], other: &[u8; AES_BLOCK_SIZE]) {
    for (b, o) in block.iter_mut().zip(other.iter()) {
        *b ^= o;
    }
}
