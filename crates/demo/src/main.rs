//! Runs each Tabula algorithm on a small fixed input and prints the result.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see what the algorithms are doing.

use std::error::Error;

use tabula_algorithms::{
    matrix::{determinant, multiply},
    search::index_of,
};
use tabula_core::Matrix;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seq = [2, 4, 6, 8, 10];
    let index = index_of(&seq, &6);
    println!("Index of 6: {index}");

    let m = Matrix::from([[5, 7], [3, 9]]);
    let det = determinant(&m)?;
    println!("Determinant: {det}");

    let a = Matrix::from([[2, 3], [4, 5]]);
    let b = Matrix::from([[6, 7], [8, 9]]);
    let product = multiply(&a, &b)?;
    log::debug!("product shape is {}", product.shape());
    println!("Matrix multiplication result:");
    println!("{product}");

    Ok(())
}
