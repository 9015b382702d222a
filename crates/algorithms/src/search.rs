//! Searching sorted sequences.
//!
//! # Algorithms
//!
//! - [`binary`] — bisection over a slice sorted in ascending order

pub mod binary;

pub use binary::{NOT_FOUND, binary_search, index_of};
