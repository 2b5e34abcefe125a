//! Native cipher context: key schedule, chaining state and partial block

use core::fmt;

use accrypt_api::{validate, Direction, Error, Mode, Padding, Result};
use accrypt_common::SecretBuffer;
use accrypt_params::utils::symmetric::{AES_BLOCK_SIZE, AES_IV_SIZE};

use crate::cipher::AesKey;
use crate::handle::ContextConfig;
use crate::modes::{cbc, ctr::Keystream, ecb};
use crate::padding;

const BLOCK: usize = AES_BLOCK_SIZE;

/// One configured cipher context.
///
/// Block modes buffer input until a whole block is available. When
/// decrypting with padding the last whole block is also held back, because
/// only finalization knows it is the last one.
#[derive(Clone)]
pub(crate) struct CipherContext {
    cipher: AesKey,
    mode: Mode,
    padding: Padding,
    direction: Direction,
    iv: SecretBuffer<BLOCK>,
    register: SecretBuffer<BLOCK>,
    keystream: Keystream,
    buffer: SecretBuffer<BLOCK>,
    buffered: usize,
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("key_bits", &self.key_bits())
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("direction", &self.direction)
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

impl CipherContext {
    pub(crate) fn new(config: &ContextConfig<'_>) -> Result<Self> {
        config.mode.check_padding(config.padding)?;

        let iv = match (config.mode.requires_iv(), config.iv) {
            (true, Some(iv)) => {
                validate::length("IV", iv.len(), AES_IV_SIZE)?;
                SecretBuffer::from_slice(iv)
                    .ok_or_else(|| Error::config("IV", "IV must be 16 bytes"))?
            }
            (true, None) => {
                return Err(Error::config(
                    "IV",
                    format!("{} mode requires an IV", config.mode),
                ))
            }
            (false, Some(_)) => {
                return Err(Error::config(
                    "IV",
                    format!("{} mode does not take an IV", config.mode),
                ))
            }
            (false, None) => SecretBuffer::zeroed(),
        };

        let cipher = AesKey::new(config.key)?;

        Ok(Self {
            cipher,
            mode: config.mode,
            padding: config.padding,
            direction: config.direction,
            keystream: Keystream::new(&iv),
            register: iv.clone(),
            iv,
            buffer: SecretBuffer::zeroed(),
            buffered: 0,
        })
    }

    pub(crate) fn key_bits(&self) -> usize {
        self.cipher.key_bits()
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn padding(&self) -> Padding {
        self.padding
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    fn holds_last_block(&self) -> bool {
        self.padding.is_padded() && !self.direction.is_encrypt()
    }

    /// Whole blocks `update` emits once `total` bytes are pending
    fn emitted_for(&self, total: usize) -> usize {
        let mut full = total - total % BLOCK;
        if self.holds_last_block() && full > 0 && total % BLOCK == 0 {
            full -= BLOCK;
        }
        full
    }

    /// Bytes pending once `in_len` more arrive
    fn pending_with(&self, in_len: usize) -> Result<usize> {
        self.buffered
            .checked_add(in_len)
            .ok_or(Error::BufferSizing {
                context: "input length",
                required: in_len,
                available: usize::MAX - self.buffered,
            })
    }

    /// Exact number of bytes `update` writes for `in_len` input bytes
    pub(crate) fn update_len(&self, in_len: usize) -> Result<usize> {
        if self.mode.is_stream() {
            return Ok(in_len);
        }
        Ok(self.emitted_for(self.pending_with(in_len)?))
    }

    /// Upper bound on the bytes `finalize` writes when `buffered` bytes are
    /// pending
    pub(crate) fn final_len(&self, buffered: usize) -> usize {
        match (self.mode.is_stream(), self.padding, self.direction) {
            (true, _, _) => 0,
            (false, Padding::Pkcs5Padding, Direction::Encrypt) => BLOCK,
            (false, Padding::Pkcs5Padding, Direction::Decrypt) => BLOCK - 1,
            (false, Padding::NoPadding, _) => buffered,
        }
    }

    /// Bytes pending after an update of `in_len` bytes
    pub(crate) fn buffered_after(&self, in_len: usize) -> Result<usize> {
        if self.mode.is_stream() {
            return Ok(0);
        }
        let total = self.pending_with(in_len)?;
        Ok(total - self.emitted_for(total))
    }

    /// Bytes written for `in_len` input, including finalization when
    /// `finalize` is set
    pub(crate) fn output_len(&self, in_len: usize, finalize: bool) -> Result<usize> {
        let update_len = self.update_len(in_len)?;
        if !finalize {
            return Ok(update_len);
        }
        let final_len = self.final_len(self.buffered_after(in_len)?);
        update_len.checked_add(final_len).ok_or(Error::BufferSizing {
            context: "input length",
            required: in_len,
            available: usize::MAX - final_len - self.buffered,
        })
    }

    /// Stream `input` through the context. `output` must hold at least
    /// `update_len(input.len())` bytes; the caller checks that.
    pub(crate) fn update(&mut self, input: &[u8], output: &mut [u8]) -> usize {
        if self.mode.is_stream() {
            let n = input.len();
            self.keystream.apply(&self.cipher, input, &mut output[..n]);
            return n;
        }

        // a slice never exceeds isize::MAX bytes, so this cannot wrap
        let out_len = self.emitted_for(self.buffered + input.len());
        let mut written = 0;
        let mut consumed = 0;
        let mut block = SecretBuffer::<BLOCK>::zeroed();

        while written < out_len {
            if self.buffered > 0 {
                let need = BLOCK - self.buffered;
                let b = block.as_array_mut();
                b[..self.buffered].copy_from_slice(&self.buffer.as_array()[..self.buffered]);
                b[self.buffered..].copy_from_slice(&input[consumed..consumed + need]);
                consumed += need;
                self.buffered = 0;
            } else {
                block
                    .as_array_mut()
                    .copy_from_slice(&input[consumed..consumed + BLOCK]);
                consumed += BLOCK;
            }
            self.crypt_block(block.as_array_mut());
            output[written..written + BLOCK].copy_from_slice(block.as_array());
            written += BLOCK;
        }

        let rest = &input[consumed..];
        self.buffer.as_array_mut()[self.buffered..self.buffered + rest.len()].copy_from_slice(rest);
        self.buffered += rest.len();
        written
    }

    /// Finish the message into `output`, which must hold `final_len` bytes.
    /// On success the context is rewound to its freshly configured state.
    pub(crate) fn finalize(&mut self, output: &mut [u8]) -> Result<usize> {
        let written = match (self.mode.is_stream(), self.padding, self.direction) {
            (true, _, _) => 0,
            (false, Padding::NoPadding, _) => {
                if self.buffered != 0 {
                    return Err(Error::BufferSizing {
                        context: "final block",
                        required: BLOCK,
                        available: self.buffered,
                    });
                }
                0
            }
            (false, Padding::Pkcs5Padding, Direction::Encrypt) => {
                let mut block = self.buffer.clone();
                padding::pad(block.as_array_mut(), self.buffered);
                self.crypt_block(block.as_array_mut());
                output[..BLOCK].copy_from_slice(block.as_array());
                BLOCK
            }
            (false, Padding::Pkcs5Padding, Direction::Decrypt) => {
                if self.buffered != BLOCK {
                    return Err(Error::integrity("final block"));
                }
                let mut block = self.buffer.clone();
                self.crypt_block(block.as_array_mut());
                let len = padding::unpad(block.as_array())
                    .ok_or_else(|| Error::integrity("final block"))?;
                output[..len].copy_from_slice(&block.as_array()[..len]);
                len
            }
        };

        self.rewind();
        Ok(written)
    }

    fn rewind(&mut self) {
        self.register.copy_from(&self.iv);
        self.keystream = Keystream::new(&self.iv);
        self.buffer = SecretBuffer::zeroed();
        self.buffered = 0;
    }

    fn crypt_block(&mut self, block: &mut [u8; BLOCK]) {
        match self.mode {
            Mode::Ecb => ecb::crypt_block(&self.cipher, self.direction, block),
            Mode::Cbc => cbc::crypt_block(&self.cipher, self.direction, &mut self.register, block),
            Mode::Ctr => self.keystream.apply_block(&self.cipher, block),
        }
    }
}
