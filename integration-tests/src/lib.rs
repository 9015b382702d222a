//! Shared proptest strategies for the Tabula integration tests.

use std::ops::RangeInclusive;

use proptest::{collection, prelude::*};
use tabula_core::Matrix;

/// Generates `rows x cols` matrices with elements drawn from `values`.
pub fn matrix(
    rows: usize,
    cols: usize,
    values: RangeInclusive<i64>,
) -> impl Strategy<Value = Matrix<i64>> {
    collection::vec(values, rows * cols).prop_map(move |data| {
        Matrix::from_shape_vec((rows, cols), data).expect("buffer length matches shape")
    })
}

/// Generates `n x n` matrices with `n` in `orders` and elements from `values`.
pub fn square_matrix(
    orders: RangeInclusive<usize>,
    values: RangeInclusive<i64>,
) -> impl Strategy<Value = Matrix<i64>> {
    orders.prop_flat_map(move |n| matrix(n, n, values.clone()))
}

/// Generates a pair of matrices `(a, b)` whose product `a * b` is defined.
pub fn compatible_pair(
    dims: RangeInclusive<usize>,
    values: RangeInclusive<i64>,
) -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (dims.clone(), dims.clone(), dims).prop_flat_map(move |(m, k, n)| {
        (matrix(m, k, values.clone()), matrix(k, n, values.clone()))
    })
}

/// Generates ascending sequences with no repeated values.
pub fn sorted_unique(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    collection::btree_set(-1_000_i64..1_000, 0..=max_len).prop_map(|set| set.into_iter().collect())
}

/// Generates ascending sequences that may contain repeated values.
pub fn sorted_with_duplicates(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    collection::vec(-20_i64..20, 0..=max_len).prop_map(|mut seq| {
        seq.sort_unstable();
        seq
    })
}
