use tabula_core::{MatrixError, Shape};
use thiserror::Error;

/// Errors that can occur while computing a determinant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("matrix must be square, got {shape}")]
    InvalidShape { shape: Shape },

    #[error("matrix order {order} exceeds the configured maximum of {max_order}")]
    OrderTooLarge { order: usize, max_order: usize },

    #[error("failed to extract minor")]
    Minor(#[from] MatrixError),
}
