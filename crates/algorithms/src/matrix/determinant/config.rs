use thiserror::Error;

/// Configuration for determinant computation.
///
/// Cofactor expansion does factorial work in the matrix order, so callers that
/// accept untrusted input can cap the order they are willing to expand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    max_order: Option<usize>,
}

/// Errors that can occur when validating a determinant config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_order must be at least 1")]
    ZeroOrder,
}

impl Config {
    /// Creates a config that rejects matrices larger than `max_order x max_order`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_order` is zero.
    pub fn new(max_order: usize) -> Result<Self, ConfigError> {
        if max_order == 0 {
            return Err(ConfigError::ZeroOrder);
        }
        Ok(Self {
            max_order: Some(max_order),
        })
    }

    /// Creates a config with no order limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_order: None }
    }

    /// Returns the largest accepted matrix order, if any.
    #[must_use]
    pub fn max_order(&self) -> Option<usize> {
        self.max_order
    }
}
