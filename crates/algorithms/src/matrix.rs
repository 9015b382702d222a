//! Dense matrix algorithms.
//!
//! - [`determinant`] — cofactor expansion along the first row
//! - [`multiply`] — the standard triple-loop matrix product
//!
//! Both check shapes up front and fail before computing anything.

pub mod determinant;
pub mod multiply;

pub use determinant::determinant;
pub use multiply::multiply;
