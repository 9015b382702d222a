//! Core types for the Tabula algorithms.
//!
//! This crate defines the shared pieces the algorithms build on:
//!
//! - [`Matrix`] — a dense, row-major, rectangular grid of values
//! - [`Shape`] — the `(rows, cols)` dimensions of a matrix
//! - [`MatrixError`] — errors raised while building or indexing a matrix
//! - [`Observer`] — receives algorithm events and optionally returns control actions

mod matrix;
mod observer;
#[cfg(feature = "serde")]
mod serialize;

pub use matrix::{Matrix, MatrixError, Shape};
pub use observer::Observer;
