use tabula_core::Shape;
use thiserror::Error;

/// Errors that can occur while multiplying matrices.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("cannot multiply {left} by {right}: inner dimensions differ")]
    ShapeMismatch { left: Shape, right: Shape },
}
