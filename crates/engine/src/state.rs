//! Engine lifecycle marker

use accrypt_api::{Error, Result};

/// Where an engine is in its lifecycle.
///
/// Setters called after `init` do not touch the live native context, so the
/// engine moves to `PendingReconfiguration` and refuses to transform until
/// `init` or `reset` applies the new configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No native context
    Uninitialized,
    /// The native context matches the managed configuration
    Active,
    /// A setter changed the managed configuration after `init`
    PendingReconfiguration,
}

impl EngineState {
    /// Fail with [`Error::State`] unless transforms are allowed
    pub fn ensure_ready(self, operation: &'static str) -> Result<()> {
        match self {
            EngineState::Active => Ok(()),
            EngineState::Uninitialized => Err(Error::state(operation, "engine not initialised")),
            EngineState::PendingReconfiguration => Err(Error::state(
                operation,
                "configuration changed since init; call init or reset",
            )),
        }
    }

    /// True once a native context exists
    pub fn is_initialized(self) -> bool {
        !matches!(self, EngineState::Uninitialized)
    }

    /// State after a managed-side setting changed
    pub(crate) fn after_config_change(self) -> Self {
        match self {
            EngineState::Active => EngineState::PendingReconfiguration,
            other => other,
        }
    }
}
