use thiserror::Error;

use super::Shape;

/// Errors that can occur when building or indexing a [`Matrix`](super::Matrix).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("data has {len} elements, expected {} for a {shape} matrix", .shape.len())]
    Length { len: usize, shape: Shape },

    #[error("index ({row}, {col}) is out of bounds for a {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },
}
