//! PKCS#5 padding for 16-byte blocks

use accrypt_internal::{ct_eq_u8, ct_in_range_u8};
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use subtle::{Choice, ConstantTimeLess};

/// Fill `block[filled..]` with the pad byte
pub(crate) fn pad(block: &mut [u8; AES_BLOCK_SIZE], filled: usize) {
    let pad_len = AES_BLOCK_SIZE - filled;
    for byte in &mut block[filled..] {
        *byte = pad_len as u8;
    }
}

/// Length of the data in a decrypted final block, or `None` if the padding
/// is malformed.
///
/// Every byte of the block is examined regardless of where the first mismatch
/// is, so the time taken does not depend on the padding contents.
pub(crate) fn unpad(block: &[u8; AES_BLOCK_SIZE]) -> Option<usize> {
    let pad_len = block[AES_BLOCK_SIZE - 1];
    let mut valid: Choice = ct_in_range_u8(pad_len, 1, AES_BLOCK_SIZE as u8);

    for (i, &byte) in block.iter().enumerate() {
        // Byte i belongs to the padding when its distance from the end is
        // below pad_len
        let from_end = (AES_BLOCK_SIZE - 1 - i) as u8;
        let in_padding = from_end.ct_lt(&pad_len);
        valid &= !in_padding | ct_eq_u8(byte, pad_len);
    }

    if bool::from(valid) {
        Some(AES_BLOCK_SIZE - pad_len as usize)
    } else {
        None
    }
}
