use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::*;

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for Matrix<R, C, T> {
  type Output = T;

  fn index(&self, (row, col): (usize, usize)) -> &T {
    match self.get(row, col) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for Matrix<R, C, T> {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    match self.get_mut(row, col) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<const R: usize, const C: usize, T> Neg for Matrix<R, C, T>
where
  T: Copy + Neg<Output = T>,
{
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|value| -value)
  }
}

impl<const R: usize, const C: usize, T> Neg for &Matrix<R, C, T>
where
  T: Copy + Neg<Output = T>,
{
  type Output = Matrix<R, C, T>;

  fn neg(self) -> Matrix<R, C, T> {
    self.clone().map(|value| -value)
  }
}

impl<const R: usize, const C: usize, T> Add for Matrix<R, C, T>
where
  T: Copy + Add<Output = T>,
{
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a + b)
  }
}

impl<const R: usize, const C: usize, T> Add for &Matrix<R, C, T>
where
  T: Copy + Add<Output = T>,
{
  type Output = Matrix<R, C, T>;

  fn add(self, rhs: Self) -> Matrix<R, C, T> {
    self.clone() + rhs.clone()
  }
}

// subtraction is addition of the negated operand
impl<const R: usize, const C: usize, T> Sub for Matrix<R, C, T>
where
  T: Copy + Add<Output = T> + Neg<Output = T>,
{
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    self + (-rhs)
  }
}

impl<const R: usize, const C: usize, T> Sub for &Matrix<R, C, T>
where
  T: Copy + Add<Output = T> + Neg<Output = T>,
{
  type Output = Matrix<R, C, T>;

  fn sub(self, rhs: Self) -> Matrix<R, C, T> {
    self.clone() - rhs.clone()
  }
}

impl<const R: usize, const C: usize, T> Mul<T> for Matrix<R, C, T>
where
  T: Copy + Mul<Output = T>,
{
  type Output = Self;

  fn mul(self, scalar: T) -> Self {
    self.map(|value| value * scalar)
  }
}

impl<const R: usize, const C: usize, T> Mul<T> for &Matrix<R, C, T>
where
  T: Copy + Mul<Output = T>,
{
  type Output = Matrix<R, C, T>;

  fn mul(self, scalar: T) -> Matrix<R, C, T> {
    self.clone() * scalar
  }
}

macro_rules! impl_scalar_ops {
  ($S:ty) => {
    impl<const R: usize, const C: usize> Mul<Matrix<R, C, $S>> for $S {
      type Output = Matrix<R, C, $S>;

      fn mul(self, matrix: Matrix<R, C, $S>) -> Matrix<R, C, $S> {
        matrix.map(|value| self * value)
      }
    }

    impl<const R: usize, const C: usize> Mul<&Matrix<R, C, $S>> for $S {
      type Output = Matrix<R, C, $S>;

      fn mul(self, matrix: &Matrix<R, C, $S>) -> Matrix<R, C, $S> {
        matrix.clone().map(|value| self * value)
      }
    }
  };
}

impl_scalar_ops!(usize);
impl_scalar_ops!(u8);
impl_scalar_ops!(u16);
impl_scalar_ops!(u32);
impl_scalar_ops!(u64);
impl_scalar_ops!(isize);
impl_scalar_ops!(i8);
impl_scalar_ops!(i16);
impl_scalar_ops!(i32);
impl_scalar_ops!(i64);
impl_scalar_ops!(f32);
impl_scalar_ops!(f64);

impl<const M: usize, const N: usize, const P: usize, T: Scalar> Mul<Matrix<N, P, T>>
  for Matrix<M, N, T>
{
  type Output = Matrix<M, P, T>;

  fn mul(self, rhs: Matrix<N, P, T>) -> Matrix<M, P, T> {
    &self * &rhs
  }
}

impl<const M: usize, const N: usize, const P: usize, T: Scalar> Mul<&Matrix<N, P, T>>
  for &Matrix<M, N, T>
{
  type Output = Matrix<M, P, T>;

  fn mul(self, rhs: &Matrix<N, P, T>) -> Matrix<M, P, T> {
    Matrix::from_fn(|row, col| {
      let mut acc = T::zero();
      for k in 0..N {
        acc = acc + self[(row, k)] * rhs[(k, col)];
      }
      acc
    })
  }
}

#[test]
fn mul_matches_cgmath() {
  let a = Matrix::<3, 3, f32>::from([[1., 2., 3.], [4., 5., 6.], [7., 8., 10.]]);
  let b = Matrix::<3, 3, f32>::from([[-2., 1., 0.], [3., 3., 3.], [0.5, 0., 1.]]);

  let to_cgmath = |m: &Matrix<3, 3, f32>| {
    cgmath::Matrix3::new(
      m[(0, 0)],
      m[(1, 0)],
      m[(2, 0)],
      m[(0, 1)],
      m[(1, 1)],
      m[(2, 1)],
      m[(0, 2)],
      m[(1, 2)],
      m[(2, 2)],
    )
  };
  let cgmath_product = to_cgmath(&a) * to_cgmath(&b);

  let product = a * b;
  for row in 0..3 {
    for col in 0..3 {
      assert_eq!(product[(row, col)], cgmath_product[col][row]);
    }
  }
}
