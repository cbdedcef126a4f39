use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::linalg::Matrix;
use crate::math::Element;

/// Row vector: a `1 x N` [`Matrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    inner: Matrix<T>,
}

impl<T: Element> Vector<T> {
    pub fn new(data: Vec<T>) -> Result<Self> {
        let len = data.len();
        Ok(Self {
            inner: Matrix::from_shape_vec((1, len), data)?,
        })
    }

    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.inner.width()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner.store().as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.get(0, index)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.set(0, index, value)
    }

    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        if self.len() != other.len() {
            return Err(LinalgError::ShapeMismatch {
                left: self.inner.shape(),
                right: other.inner.shape(),
            });
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product, expanding the 3x3 determinant with unit vectors on the
    /// first row.
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        for v in [self, other] {
            if v.len() != 3 {
                return Err(LinalgError::InvalidDimension {
                    expected: 3,
                    got: v.len(),
                });
            }
        }
        let (a, b) = (self.as_slice(), other.as_slice());
        Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    pub fn scale(&self, factor: T) -> Vector<T> {
        Vector {
            inner: self.inner.scale(factor),
        }
    }
}

impl<T: Element + Float> Vector<T> {
    /// Euclidean norm.
    pub fn magnitude(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }

    /// Divide every component by the magnitude, in place.
    ///
    /// A zero vector comes out as NaN components.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.inner = self.inner.div_scalar(magnitude);
        self
    }

    pub fn normalized(&self) -> Vector<T> {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }
}

impl<T: Element> Matrix<T> {
    /// Linear transformation `self * v^T`, returned as a row vector.
    pub fn apply(&self, v: &Vector<T>) -> Result<Vector<T>> {
        let column = self.multiply(&v.inner.transpose())?;
        Ok(Vector {
            inner: column.transpose(),
        })
    }
}

impl<T: Element> TryFrom<Matrix<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        if matrix.height() != 1 {
            return Err(LinalgError::InvalidDimension {
                expected: 1,
                got: matrix.height(),
            });
        }
        Ok(Vector { inner: matrix })
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    fn from(value: Vector<T>) -> Self {
        value.inner
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[(0, index)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[(0, index)]
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let len = self.len();
        for (idx, value) in self.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != len {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
