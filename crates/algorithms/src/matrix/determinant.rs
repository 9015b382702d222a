mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use std::ops::Neg;

use log::{debug, trace};
use num_traits::Num;
use tabula_core::Matrix;

/// Computes the determinant of a square matrix by cofactor expansion.
///
/// Equivalent to [`determinant_with`] using [`Config::default`], which places
/// no limit on the matrix order.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if the matrix is not square.
///
/// # Examples
///
/// ```
/// use tabula_algorithms::matrix::determinant;
/// use tabula_core::Matrix;
///
/// let m = Matrix::from([[5, 7], [3, 9]]);
/// assert_eq!(determinant(&m).unwrap(), 24);
/// ```
pub fn determinant<T>(matrix: &Matrix<T>) -> Result<T, Error>
where
    T: Copy + Num + Neg<Output = T>,
{
    determinant_with(matrix, &Config::default())
}

/// Computes the determinant of a square matrix by cofactor expansion
/// along the first row, subject to the limits in `config`.
///
/// The work grows factorially with the order, so large inputs should be
/// bounded with [`Config::new`]. Arithmetic is not overflow-checked.
///
/// A `0x0` matrix has determinant zero.
///
/// # Errors
///
/// Returns [`Error::InvalidShape`] if the matrix is not square, or
/// [`Error::OrderTooLarge`] if its order exceeds `config.max_order()`.
pub fn determinant_with<T>(matrix: &Matrix<T>, config: &Config) -> Result<T, Error>
where
    T: Copy + Num + Neg<Output = T>,
{
    if !matrix.is_square() {
        debug!("determinant rejected {} matrix", matrix.shape());
        return Err(Error::InvalidShape {
            shape: matrix.shape(),
        });
    }

    let order = matrix.rows();
    if let Some(max_order) = config.max_order() {
        if order > max_order {
            debug!("determinant rejected order {order}, limit is {max_order}");
            return Err(Error::OrderTooLarge { order, max_order });
        }
    }

    debug!("computing determinant of order {order}");
    expand(matrix)
}

/// Expands a square matrix along its first row.
fn expand<T>(matrix: &Matrix<T>) -> Result<T, Error>
where
    T: Copy + Num + Neg<Output = T>,
{
    let m = |row: usize, col: usize| matrix[(row, col)];

    match matrix.rows() {
        0 => Ok(T::zero()),
        1 => Ok(m(0, 0)),
        2 => Ok(m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)),
        order => {
            let mut det = T::zero();
            let mut sign = T::one();

            for col in 0..order {
                let minor = matrix.minor(0, col)?;
                trace!("order {order}: expanding cofactor at column {col}");
                det = det + sign * m(0, col) * expand(&minor)?;
                sign = -sign;
            }

            Ok(det)
        }
    }
}
