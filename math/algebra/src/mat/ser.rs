use serde::de;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

// serialized as a sequence of rows; hand-written so deserialization can
// never produce a buffer whose length disagrees with the dimensions

impl<const R: usize, const C: usize, T: Serialize> Serialize for Matrix<R, C, T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(R))?;
    for row in 0..R {
      seq.serialize_element(&self.data[row * C..(row + 1) * C])?;
    }
    seq.end()
  }
}

impl<'de, const R: usize, const C: usize, T> Deserialize<'de> for Matrix<R, C, T>
where
  T: Scalar + Deserialize<'de>,
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
    Matrix::from_rows(&rows).map_err(de::Error::custom)
  }
}
