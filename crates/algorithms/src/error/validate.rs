//! Precondition guards
//!
//! Each guard returns `Ok(())` when its check passes, so a function's
//! preconditions read as a run of `validate::...(...)?` lines. Length guards
//! report the bound that was violated as `expected`.

use super::{Error, Result};

fn length_error(context: &'static str, expected: usize, actual: usize) -> Error {
    Error::Length {
        context,
        expected,
        actual,
    }
}

/// Reject parameter `name` with `reason` unless `condition` holds
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::param(name, reason))
    }
}

/// Require an exact encoded length, such as a fixed-width scalar or point
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(length_error(context, expected, actual))
    }
}

/// Require at least `min` bytes before slicing into an encoding
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual >= min {
        Ok(())
    } else {
        Err(length_error(context, min, actual))
    }
}

/// Cap an input whose size is bounded by the encoding, such as an SM2 identity
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual <= max {
        Ok(())
    } else {
        Err(length_error(context, max, actual))
    }
}
