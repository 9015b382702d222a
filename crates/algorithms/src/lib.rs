//! Searching and dense matrix algorithms for the Tabula workspace.
//!
//! # Modules
//!
//! - [`search`] — locating values in sorted sequences
//! - [`matrix`] — determinants and products of [`Matrix`](tabula_core::Matrix) values
//!
//! Every operation is a pure function: inputs are only read, and any result
//! matrix is freshly allocated.

pub mod matrix;
pub mod search;
