use crate::*;

impl<const R: usize, const C: usize, T: Scalar> Matrix<R, C, T> {
  /// Reshapes into different dimensions by copying the overlapping top-left
  /// submatrix; everything outside the overlap is zero. Truncation only
  /// happens when a caller asks for it here, never through arithmetic or
  /// argument passing.
  pub fn resized<const R2: usize, const C2: usize>(&self) -> Matrix<R2, C2, T> {
    Matrix::from_fn(|row, col| {
      if row < R && col < C {
        self[(row, col)]
      } else {
        T::zero()
      }
    })
  }
}

impl<const R: usize, const C: usize, T: Scalar> From<[[T; C]; R]> for Matrix<R, C, T> {
  fn from(rows: [[T; C]; R]) -> Self {
    Self::from_block(rows)
  }
}

impl<const R: usize, const C: usize, T: Copy> From<Matrix<R, C, T>> for [[T; C]; R] {
  fn from(matrix: Matrix<R, C, T>) -> Self {
    std::array::from_fn(|row| std::array::from_fn(|col| matrix[(row, col)]))
  }
}
