//! Validation utilities for key exchange operations

use super::{Error, Result};

/// Fail the exchange with `reason` unless `condition` holds
pub fn agreement(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::KeyAgreement { reason });
    }
    Ok(())
}

/// Validate key material
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate that a session method is called in order
pub fn state(condition: bool, operation: &'static str, state: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidState { operation, state });
    }
    Ok(())
}
