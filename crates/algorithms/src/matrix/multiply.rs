mod error;

pub use error::Error;

use std::ops::Mul;

use log::debug;
use num_traits::Zero;
use tabula_core::Matrix;

/// Multiplies `a` (`m x k`) by `b` (`k x n`), returning a new `m x n` matrix.
///
/// Each entry is the dot product of a row of `a` and a column of `b`,
/// accumulated into a zero-initialized result. Arithmetic is not
/// overflow-checked.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `a.cols() != b.rows()`.
///
/// # Examples
///
/// ```
/// use tabula_algorithms::matrix::multiply;
/// use tabula_core::Matrix;
///
/// let a = Matrix::from([[2, 3], [4, 5]]);
/// let b = Matrix::from([[6, 7], [8, 9]]);
/// assert_eq!(multiply(&a, &b).unwrap(), Matrix::from([[36, 41], [64, 73]]));
/// ```
pub fn multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, Error>
where
    T: Copy + Zero + Mul<Output = T>,
{
    if a.cols() != b.rows() {
        debug!("multiply rejected {} x {}", a.shape(), b.shape());
        return Err(Error::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    debug!("multiplying {} x {}", a.shape(), b.shape());

    let mut product = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            for k in 0..a.cols() {
                product[(i, j)] = product[(i, j)] + a[(i, k)] * b[(k, j)];
            }
        }
    }

    Ok(product)
}
