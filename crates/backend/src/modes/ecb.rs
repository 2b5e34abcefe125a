use accrypt_api::Direction;
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::cipher::AesKey;

pub(crate) fn crypt_block(cipher: &AesKey, direction: Direction, block: &mut [u8; AES_BLOCK_SIZE]) {
    match direction {
        Direction::Encrypt => cipher.encrypt_block(block),
        Direction::Decrypt => cipher.decrypt_block(block),
    }
}
