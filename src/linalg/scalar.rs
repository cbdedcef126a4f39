use std::fmt;

use crate::error::{LinalgError, Result};
use crate::linalg::Matrix;
use crate::math::{Array2, Element};

/// A `1 x 1` [`Matrix`] used as a coefficient against other matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scalar<T> {
    value: T,
}

impl<T: Element> Scalar<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn scale(&self, matrix: &Matrix<T>) -> Matrix<T> {
        matrix.scale(self.value)
    }

    /// Add the value to every cell of `matrix`.
    pub fn add_to(&self, matrix: &Matrix<T>) -> Matrix<T> {
        matrix.add_scalar(self.value)
    }

    /// `matrix / value`. Dividing a scalar by a matrix is not defined.
    pub fn divide(&self, matrix: &Matrix<T>) -> Matrix<T> {
        matrix.div_scalar(self.value)
    }

    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from(*self)
    }
}

impl<T: Element> From<Scalar<T>> for Matrix<T> {
    fn from(scalar: Scalar<T>) -> Self {
        Matrix::from(Array2::scalar(scalar.value))
    }
}

impl<T: Element> TryFrom<Matrix<T>> for Scalar<T> {
    type Error = LinalgError;

    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        if matrix.shape() != (1, 1) {
            return Err(LinalgError::InvalidDimension {
                expected: 1,
                got: matrix.height() * matrix.width(),
            });
        }
        Ok(Scalar::new(matrix[(0, 0)]))
    }
}

impl<T: Element> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
