//! Configurable bounds on sequence construction.

use tracing::debug;

use crate::{Error, Result};

/// Largest length a sequence may be constructed with by default (2³² − 1).
pub const DEFAULT_MAX_LENGTH: usize = u32::MAX as usize;

/// Bounds applied when a caller asks for a sequence of a given length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of elements a constructed sequence may hold.
    pub max_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Limits {
    /// Creates limits that accept any length addressable on this platform.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_length: usize::MAX,
        }
    }

    /// Builder method to set the maximum length.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validates a requested length, returning it as `usize`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `length` is negative or exceeds
    /// [`Limits::max_length`].
    pub fn check_length(&self, length: i64) -> Result<usize> {
        if length < 0 {
            debug!(length, "rejected negative length");
            return Err(Error::negative_length(length));
        }
        match usize::try_from(length) {
            Ok(len) if len <= self.max_length => Ok(len),
            _ => {
                debug!(length, max = self.max_length, "rejected length above limit");
                Err(Error::length_too_large(length, self.max_length))
            }
        }
    }
}
