//! Serde support for [`Matrix`], encoded as a sequence of rows.
//!
//! Deserialization goes through [`Matrix::from_rows`], so ragged input is
//! rejected with the same error a caller would get from the constructor.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::Matrix;

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}
