mod error;
mod shape;

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use num_traits::{One, Zero};

pub use error::MatrixError;
pub use shape::Shape;

/// A dense, rectangular matrix stored in row-major order.
///
/// Every row of a `Matrix` has the same length. The invariant is checked when
/// the matrix is built from nested rows or a flat buffer, so algorithms can
/// rely on [`Matrix::shape`] describing every row.
///
/// # Examples
///
/// ```
/// use tabula_core::{Matrix, Shape};
///
/// let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m.shape(), Shape::new(2, 3));
/// assert_eq!(m[(1, 2)], 6);
/// assert_eq!(m.to_string(), "1 2 3\n4 5 6");
///
/// let ragged = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
/// assert!(ragged.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// An empty `rows` vector produces a `0x0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] if any row's length differs from the
    /// length of the first row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = Shape::new(rows.len(), cols);

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::Ragged {
                row,
                len: r.len(),
                expected: cols,
            });
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self { shape, data })
    }

    /// Builds a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Length`] if `data.len()` is not `rows * cols`.
    pub fn from_shape_vec(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self, MatrixError> {
        let shape = shape.into();
        if data.len() != shape.len() {
            return Err(MatrixError::Length {
                len: data.len(),
                shape,
            });
        }
        Ok(Self { shape, data })
    }

    /// Returns the `(rows, cols)` shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    /// Returns the element at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.data[i])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    #[must_use]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(|i| &mut self.data[i])
    }

    /// Returns row `row` as a slice, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.shape.rows).then(|| self.row_slice(row))
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.shape.rows).map(|row| self.row_slice(row))
    }

    /// Returns the row-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major element buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.shape.rows && col < self.shape.cols).then_some(row * self.shape.cols + col)
    }

    fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns the minor formed by deleting `row` and `col`.
    ///
    /// The remaining rows and columns keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `row` or `col` is outside the matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if self.offset(row, col).is_none() {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                shape: self.shape,
            });
        }

        let data = self
            .iter_rows()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, value)| value.clone())
            })
            .collect();

        Ok(Self {
            shape: Shape::new(self.shape.rows - 1, self.shape.cols - 1),
            data,
        })
    }

    /// Copies the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Creates a `rows x cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let shape = Shape::new(rows, cols);
        Self {
            shape,
            data: vec![T::zero(); shape.len()],
        }
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Creates the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            shape: Shape::new(R, C),
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(value) => value,
            None => panic!(
                "index ({row}, {col}) is out of bounds for a {} matrix",
                self.shape
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let shape = self.shape;
        match self.get_mut(row, col) {
            Some(value) => value,
            None => panic!("index ({row}, {col}) is out of bounds for a {shape} matrix"),
        }
    }
}

/// Formats one row per line with values separated by single spaces.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_nested_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m, Matrix::from([[1, 2, 3], [4, 5, 6]]));
    }

    #[test]
    fn empty_rows_build_an_empty_matrix() {
        let m = Matrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(m.shape(), Shape::new(0, 0));
        assert!(m.is_square());
        assert_eq!(m.iter_rows().len(), 0);
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 2,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = Matrix::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, MatrixError::Length { len: 3, .. }));
        assert_eq!(
            err.to_string(),
            "data has 3 elements, expected 4 for a 2x2 matrix"
        );
    }

    #[test]
    fn zero_width_rows_are_iterable() {
        let m = Matrix::<i32>::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 0));
        assert!(m.iter_rows().all(<[i32]>::is_empty));
    }

    #[test]
    fn indexing_respects_row_boundaries() {
        let m = Matrix::from([[1, 2], [3, 4]]);

        assert_eq!(m.get(1, 0), Some(&3));
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), Some(&[3, 4][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        let _value = m[(0, 2)];
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut m = Matrix::<i64>::zeros(2, 3);
        m[(1, 2)] = 7;
        assert_eq!(m.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 7]]);
    }

    #[test]
    fn minor_deletes_row_and_column() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

        assert_eq!(m.minor(0, 0).unwrap(), Matrix::from([[5, 6], [8, 9]]));
        assert_eq!(m.minor(1, 1).unwrap(), Matrix::from([[1, 3], [7, 9]]));
        assert_eq!(m.minor(2, 0).unwrap(), Matrix::from([[2, 3], [5, 6]]));
    }

    #[test]
    fn minor_of_rectangular_matrix() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.minor(0, 1).unwrap(), Matrix::from([[4, 6]]));
    }

    #[test]
    fn minor_out_of_bounds() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        assert!(matches!(
            m.minor(2, 0),
            Err(MatrixError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(m.minor(0, 2).is_err());
    }

    #[test]
    fn identity_has_ones_on_the_diagonal() {
        let i = Matrix::<i32>::identity(3);
        assert_eq!(i, Matrix::from([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
    }

    #[test]
    fn displays_rows_on_separate_lines() {
        let m = Matrix::from([[36, 41], [64, 73]]);
        assert_eq!(m.to_string(), "36 41\n64 73");
    }
}
