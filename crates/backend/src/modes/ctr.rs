//! Counter mode keystream
//!
//! The counter block is the full 16-byte IV, incremented as one big-endian
//! 128-bit integer that wraps on overflow.

use byteorder::{BigEndian, ByteOrder};

use accrypt_common::SecretBuffer;
use accrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::cipher::AesKey;

/// Keystream position within a CTR context
#[derive(Clone)]
pub(crate) struct Keystream {
    counter: SecretBuffer<AES_BLOCK_SIZE>,
    block: SecretBuffer<AES_BLOCK_SIZE>,
    used: usize,
}

impl Keystream {
    pub(crate) fn new(iv: &SecretBuffer<AES_BLOCK_SIZE>) -> Self {
        Self {
            counter: iv.clone(),
            block: SecretBuffer::zeroed(),
            used: AES_BLOCK_SIZE,
        }
    }

    /// XOR `input` with the keystream into `output`. Both have the same
    /// length.
    pub(crate) fn apply(&mut self, cipher: &AesKey, input: &[u8], output: &mut [u8]) {
        for (out, byte) in output.iter_mut().zip(input.iter()) {
            if self.used == AES_BLOCK_SIZE {
                self.refill(cipher);
            }
            *out = byte ^ self.block.as_array()[self.used];
            self.used += 1;
        }
    }

    /// Apply the keystream to one block in place
    pub(crate) fn apply_block(&mut self, cipher: &AesKey, block: &mut [u8; AES_BLOCK_SIZE]) {
        let input = SecretBuffer::new(*block);
        self.apply(cipher, input.as_array(), block);
    }

    fn refill(&mut self, cipher: &AesKey) {
        self.block.copy_from(&self.counter);
        cipher.encrypt_block(self.block.as_array_mut());

        let counter = self.counter.as_array_mut();
        let next = BigEndian::read_u128(counter).wrapping_add(1);
        BigEndian::write_u128(counter, next);
        self.used = 0;
    }
}
