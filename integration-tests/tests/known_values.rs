use tabula_algorithms::{
    matrix::{determinant, determinant::Error as DetError, multiply, multiply::Error as MulError},
    search::{NOT_FOUND, index_of},
};
use tabula_core::Matrix;

#[test]
fn binary_search_values() {
    let seq = [1, 3, 5, 7, 9];
    assert_eq!(index_of(&seq, &5), 2);
    assert_eq!(index_of(&seq, &4), NOT_FOUND);

    assert_eq!(index_of(&[2, 4, 6, 8, 10], &6), 2);
}

#[test]
fn determinant_values() {
    assert_eq!(determinant(&Matrix::from([[4]])), Ok(4));
    assert_eq!(determinant(&Matrix::from([[3, 8], [4, 6]])), Ok(-14));
    assert_eq!(
        determinant(&Matrix::from([[6, 1, 1], [4, -2, 5], [2, 8, 7]])),
        Ok(-306)
    );
    assert_eq!(determinant(&Matrix::from([[5, 7], [3, 9]])), Ok(24));
}

#[test]
fn determinant_of_ragged_rows_never_reaches_the_algorithm() {
    let ragged = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
    assert!(ragged.is_err());

    let tall = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert!(matches!(determinant(&tall), Err(DetError::InvalidShape { .. })));
}

#[test]
fn multiply_values() {
    let product = multiply(
        &Matrix::from([[1, 2], [3, 4]]),
        &Matrix::from([[2, 0], [1, 2]]),
    )
    .unwrap();
    assert_eq!(product.to_rows(), vec![vec![4, 4], vec![10, 8]]);

    let product = multiply(
        &Matrix::from([[2, 3], [4, 5]]),
        &Matrix::from([[6, 7], [8, 9]]),
    )
    .unwrap();
    assert_eq!(product.to_string(), "36 41\n64 73");
}

#[test]
fn multiply_mismatch() {
    let result = multiply(&Matrix::from([[1, 2, 3]]), &Matrix::from([[1, 2, 3]]));
    assert!(matches!(result, Err(MulError::ShapeMismatch { .. })));
}
