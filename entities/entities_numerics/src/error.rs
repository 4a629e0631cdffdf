//! Error types for the numerics entities.
//!
//! Arithmetic never fails: undefined results surface as the invalid big
//! integer or as a rational NaN. The only reportable condition is a caller
//! asking for a base the digit alphabet cannot express.

use crate::big::{MAX_BASE, MIN_BASE};

/// Errors raised when a numeric base is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixError {
    /// Base outside `MIN_BASE..=MAX_BASE`
    OutOfRange(u32),
}

impl RadixError {
    /// Validate a base, returning it unchanged when usable
    pub fn check(base: u32) -> Result<u32, RadixError> {
        if (MIN_BASE..=MAX_BASE).contains(&base) {
            Ok(base)
        } else {
            Err(RadixError::OutOfRange(base))
        }
    }
}

impl std::fmt::Display for RadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadixError::OutOfRange(base) => write!(
                f,
                "Base must be between {} and {}, got {}",
                MIN_BASE, MAX_BASE, base
            ),
        }
    }
}

impl std::error::Error for RadixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_alphabet_bounds() {
        assert_eq!(RadixError::check(2), Ok(2));
        assert_eq!(RadixError::check(36), Ok(36));
    }

    #[test]
    fn test_check_rejects_outside_alphabet() {
        assert_eq!(RadixError::check(1), Err(RadixError::OutOfRange(1)));
        assert_eq!(RadixError::check(37), Err(RadixError::OutOfRange(37)));
    }

    #[test]
    fn test_display() {
        let msg = RadixError::OutOfRange(40).to_string();
        assert_eq!(msg, "Base must be between 2 and 36, got 40");
    }
}
