//! The managed AES engine

use core::fmt;

use tracing::debug;

use accrypt_api::{
    validate, BlockCipher, CipherParameters, Direction, Error, IvParameter, KeyParameter, Mode,
    Padding, Result,
};
use accrypt_backend::{AesBackend, ContextConfig, NativeBackend};
use accrypt_params::utils::symmetric::{
    AES_ALGORITHM_NAME, AES_BLOCK_SIZE, AES_IV_SIZE, AES_KEY_SIZES,
};

use crate::config::CipherSpec;
use crate::native::NativeContext;
use crate::state::EngineState;

/// AES engine delegating its transforms to a [`NativeBackend`].
///
/// The mode is fixed at construction. Padding and IV may be changed later,
/// but only take effect at the next [`init`](BlockCipher::init) or
/// [`reset`](BlockCipher::reset); in between the engine is
/// [`EngineState::PendingReconfiguration`] and refuses to transform.
///
/// The native context is released by [`release`](Self::release) or, failing
/// that, when the engine drops.
pub struct BlockCipherEngine<B: NativeBackend = AesBackend> {
    mode: Mode,
    padding: Padding,
    iv: Option<IvParameter>,
    direction: Direction,
    params: Option<KeyParameter>,
    state: EngineState,
    context: NativeContext<B>,
}

impl BlockCipherEngine<AesBackend> {
    /// Engine for `mode` without padding on a private [`AesBackend`]
    pub fn new(mode: Mode) -> Self {
        Self::from_spec(CipherSpec::from(mode))
    }

    /// Engine for `mode` and `padding`, rejecting pairs the mode cannot honour
    pub fn with_padding(mode: Mode, padding: Padding) -> Result<Self> {
        Ok(Self::from_spec(CipherSpec::new(mode, padding)?))
    }

    pub fn from_spec(spec: CipherSpec) -> Self {
        Self::with_backend(spec, AesBackend::new())
    }
}

impl<B: NativeBackend> BlockCipherEngine<B> {
    /// Engine on a caller-supplied backend
    pub fn with_backend(spec: CipherSpec, backend: B) -> Self {
        Self {
            mode: spec.mode(),
            padding: spec.padding(),
            iv: None,
            direction: Direction::Encrypt,
            params: None,
            state: EngineState::Uninitialized,
            context: NativeContext::new(backend),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Direction of the last successful `init`
    pub fn direction(&self) -> Option<Direction> {
        self.state.is_initialized().then_some(self.direction)
    }

    /// Managed IV, if any
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_ref().map(IvParameter::iv)
    }

    /// Drop the managed IV. Takes effect at the next `init` or `reset`.
    pub fn clear_iv(&mut self) {
        if self.iv.take().is_some() {
            self.state = self.state.after_config_change();
        }
    }

    pub fn backend(&self) -> &B {
        self.context.backend()
    }

    /// Bytes the next call writes for `in_len` input bytes, finishing the
    /// message when `finalize` is set
    pub fn output_size(&self, in_len: usize, finalize: bool) -> Result<usize> {
        self.state.ensure_ready("output_size")?;
        let (backend, handle) = self.context.parts("output_size")?;
        backend.output_len(handle, in_len, finalize)
    }

    /// Release the native context. The engine returns to
    /// [`EngineState::Uninitialized`] even if the backend reports a failure.
    pub fn release(&mut self) -> Result<()> {
        let result = self.context.release();
        self.state = EngineState::Uninitialized;
        self.params = None;
        if let Ok(true) = result {
            debug!(mode = %self.mode, "released native context");
        }
        result.map(|_| ())
    }

    fn check_iv(&self, iv: Option<&IvParameter>) -> Result<()> {
        match (self.mode.requires_iv(), iv) {
            (true, Some(iv)) => validate::length("AES init IV", iv.len(), AES_IV_SIZE),
            (true, None) => Err(Error::config(
                "AES init",
                format!("{} mode requires an IV", self.mode),
            )),
            (false, Some(_)) => Err(Error::config(
                "AES init",
                format!("{} mode does not take an IV", self.mode),
            )),
            (false, None) => Ok(()),
        }
    }
}

/// Name integrity failures after the engine operation, never the check
fn in_operation(operation: &'static str) -> impl Fn(Error) -> Error {
    move |err| match err {
        Error::Integrity { .. } => Error::integrity(operation),
        other => other,
    }
}

impl<B: NativeBackend> BlockCipher for BlockCipherEngine<B> {
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let (key, iv) = match params {
            CipherParameters::Key(key) => (key, None),
            CipherParameters::KeyWithIv { key, iv } => (key, Some(iv)),
            other @ CipherParameters::Iv(_) => {
                return Err(Error::config(
                    "AES init",
                    format!("invalid parameter passed to AES init - {}", other.kind()),
                ))
            }
        };

        validate::parameter(
            AES_KEY_SIZES.contains(&key.len()),
            "AES init",
            "key must be 16, 24 or 32 bytes",
        )?;
        let active_iv = iv.as_ref().or(self.iv.as_ref());
        self.check_iv(active_iv)?;

        let reconfigure = self.context.is_allocated();
        let config = ContextConfig {
            key: key.key(),
            direction,
            mode: self.mode,
            padding: self.padding,
            iv: active_iv.map(IvParameter::iv),
        };
        if let Err(err) = self.context.configure(&config) {
            if !self.context.is_allocated() {
                self.state = EngineState::Uninitialized;
                self.params = None;
            }
            return Err(err);
        }

        debug!(
            mode = %self.mode,
            padding = %self.padding,
            direction = %direction,
            key_bits = key.len() * 8,
            reconfigure,
            "engine initialised"
        );

        self.direction = direction;
        self.params = Some(key);
        if let Some(iv) = iv {
            self.iv = Some(iv);
        }
        self.state = EngineState::Active;
        Ok(())
    }

    fn algorithm_name(&self) -> &'static str {
        AES_ALGORITHM_NAME
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        in_len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        self.state.ensure_ready("process_block")?;
        validate::span("process_block input", in_off, in_len, input.len())?;

        let (backend, handle) = self.context.parts_mut("process_block")?;
        let required = backend.output_len(handle, in_len, false)?;
        validate::capacity("process_block output", required, output.len(), out_off)?;

        backend.transform_block(handle, input, in_off, in_len, output, out_off)
    }

    fn do_final(&mut self, output: &mut [u8], out_off: usize) -> Result<usize> {
        self.state.ensure_ready("do_final")?;

        let (backend, handle) = self.context.parts_mut("do_final")?;
        let required = backend.output_len(handle, 0, true)?;
        validate::capacity("do_final output", required, output.len(), out_off)?;

        backend
            .finalize_transform(handle, output, out_off)
            .map_err(in_operation("do_final"))
    }

    fn buffer_crypt(
        &mut self,
        input: &[u8],
        input_pos: usize,
        input_limit: usize,
        output: &mut [u8],
        output_pos: usize,
        is_update: bool,
    ) -> Result<usize> {
        self.state.ensure_ready("buffer_crypt")?;
        if input_limit < input_pos {
            return Err(Error::BufferSizing {
                context: "buffer_crypt input",
                required: input_pos,
                available: input_limit,
            });
        }
        let in_len = input_limit - input_pos;
        validate::span("buffer_crypt input", input_pos, in_len, input.len())?;

        let (backend, handle) = self.context.parts_mut("buffer_crypt")?;
        let required = backend.output_len(handle, in_len, !is_update)?;
        validate::capacity("buffer_crypt output", required, output.len(), output_pos)?;

        backend
            .buffer_transform(
                handle,
                input,
                input_pos,
                input_limit,
                output,
                output_pos,
                is_update,
            )
            .map_err(in_operation("buffer_crypt"))
    }

    fn reset(&mut self) -> Result<()> {
        validate::state(self.state.is_initialized(), "reset", "engine not initialised")?;
        let key = self
            .params
            .clone()
            .ok_or_else(|| Error::state("reset", "no key to reset with"))?;

        debug!(mode = %self.mode, direction = %self.direction, "resetting engine");
        self.init(self.direction, CipherParameters::Key(key))
    }

    fn set_iv(&mut self, iv: &[u8]) {
        let iv = IvParameter::new(iv);
        if self.iv.as_ref() != Some(&iv) {
            self.iv = Some(iv);
            self.state = self.state.after_config_change();
        }
    }

    fn set_padding(&mut self, padding: Padding) -> Result<()> {
        self.mode.check_padding(padding)?;
        if padding != self.padding {
            self.padding = padding;
            self.state = self.state.after_config_change();
        }
        Ok(())
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn head_length(&self) -> usize {
        0
    }
}

impl<B: NativeBackend> fmt::Debug for BlockCipherEngine<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockCipherEngine")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("state", &self.state)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
