//! Validation utilities shared by the engine and the backend
//!
//! Each helper checks one precondition and maps a violation onto the matching
//! [`Error`] variant, so call sites read as a flat list of `?` checks.

use super::{Error, Result};

/// Validate a configuration condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::config(context, reason));
    }
    Ok(())
}

/// Validate a state condition
#[inline(always)]
pub fn state(condition: bool, operation: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::state(operation, reason));
    }
    Ok(())
}

/// Validate an exact length of configuration material (key, IV)
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::config(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// Validate that `[offset, offset + len)` lies inside a buffer of `buffer_len`
/// bytes
#[inline(always)]
pub fn span(context: &'static str, offset: usize, len: usize, buffer_len: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= buffer_len => Ok(()),
        Some(end) => Err(Error::BufferSizing {
            context,
            required: end,
            available: buffer_len,
        }),
        None => Err(Error::BufferSizing {
            context,
            required: usize::MAX,
            available: buffer_len,
        }),
    }
}

/// Validate that `required` bytes fit in a buffer of `buffer_len` bytes
/// starting at `offset`
#[inline(always)]
pub fn capacity(
    context: &'static str,
    required: usize,
    buffer_len: usize,
    offset: usize,
) -> Result<()> {
    let available = buffer_len.saturating_sub(offset);
    if offset > buffer_len || required > available {
        return Err(Error::BufferSizing {
            context,
            required,
            available,
        });
    }
    Ok(())
}
