use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use log::{debug, warn};

use crate::config::{FormatOptions, LinalgConfig};
use crate::error::{LinalgError, Result};
use crate::linalg::elimination::{
    backward_eliminate, diagonal_product, first_degenerate_row, forward_eliminate,
    fraction_free_backward, fraction_free_eliminate, truncates_division,
};
use crate::math::{Array2, Element};

/// Dense `height x width` matrix over `T`.
///
/// Every operation returns a fresh value; the only in-place mutators are
/// [`Matrix::set`], [`Matrix::get_mut`] and `IndexMut`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    store: Array2<T>,
}

impl<T: Element> Matrix<T> {
    /// Build from nested rows. Ragged rows fail with `ShapeMismatch`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        Ok(Self {
            store: Array2::from_rows(rows)?,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        Ok(Self {
            store: Array2::from_shape_vec(shape, data)?,
        })
    }

    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        Ok(Self {
            store: Array2::zeros(height, width)?,
        })
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut store = Array2::zeros(n, n)?;
        for i in 0..n {
            store[(i, i)] = T::one();
        }
        Ok(Self { store })
    }

    pub fn height(&self) -> usize {
        self.store.height()
    }

    pub fn width(&self) -> usize {
        self.store.width()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.store.shape()
    }

    pub fn is_square(&self) -> bool {
        self.height() == self.width()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.store.get(row, col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.store.get_mut(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.store.set(row, col, value)
    }

    /// Read-only access to the underlying buffer.
    pub fn store(&self) -> &Array2<T> {
        &self.store
    }

    pub fn into_store(self) -> Array2<T> {
        self.store
    }

    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.store.to_nested()
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let store = self.store.zip_map(&other.store, |&a, &b| a + b)?;
        Ok(Matrix { store })
    }

    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let store = self.store.zip_map(&other.store, |&a, &b| a - b)?;
        Ok(Matrix { store })
    }

    pub fn scale(&self, factor: T) -> Matrix<T> {
        Matrix {
            store: self.store.mapv(|&v| v * factor),
        }
    }

    pub fn div_scalar(&self, divisor: T) -> Matrix<T> {
        Matrix {
            store: self.store.mapv(|&v| v / divisor),
        }
    }

    /// Add `value` to every cell.
    pub fn add_scalar(&self, value: T) -> Matrix<T> {
        Matrix {
            store: self.store.mapv(|&v| v + value),
        }
    }

    /// Naive `O(n^3)` product.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.width() != other.height() {
            return Err(LinalgError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (height, inner, width) = (self.height(), self.width(), other.width());
        let mut out = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                let mut cell = T::zero();
                for k in 0..inner {
                    cell = cell + self.store[(i, k)] * other.store[(k, j)];
                }
                out.push(cell);
            }
        }
        Matrix::from_shape_vec((height, width), out)
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            store: self.store.transpose(),
        }
    }

    // ---------------------------------------------------------------------
    // Minors and cofactors
    // ---------------------------------------------------------------------

    /// Copy of the matrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        let (height, width) = self.shape();
        if row >= height || col >= width {
            return Err(LinalgError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            });
        }
        if height < 2 || width < 2 {
            return Err(LinalgError::InvalidDimension {
                expected: 2,
                got: height.min(width),
            });
        }

        let data: Vec<T> = self
            .store
            .rows()
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Matrix::from_shape_vec((height - 1, width - 1), data)
    }

    /// Signed determinant of the `(row, col)` minor.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        self.cofactor_with(row, col, &LinalgConfig::default())
    }

    pub fn cofactor_with(&self, row: usize, col: usize, config: &LinalgConfig) -> Result<T> {
        self.require_square()?;
        let det = self.minor(row, col)?.determinant_with(config);
        if (row + col) % 2 == 0 {
            Ok(det)
        } else {
            Ok(T::zero() - det)
        }
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        self.adjugate_with(&LinalgConfig::default())
    }

    pub fn adjugate_with(&self, config: &LinalgConfig) -> Result<Matrix<T>> {
        self.require_square()?;
        let n = self.height();
        if n == 1 {
            return Matrix::from_shape_vec((1, 1), vec![T::one()]);
        }

        let mut adjugate = Matrix::zeros(n, n)?;
        for i in 0..n {
            for j in 0..n {
                adjugate.store[(j, i)] = self.cofactor_with(i, j, config)?;
            }
        }
        Ok(adjugate)
    }

    // ---------------------------------------------------------------------
    // Elimination
    // ---------------------------------------------------------------------

    /// Determinant by forward elimination.
    ///
    /// A non-square matrix has determinant zero; this is not an error.
    /// Integer element types use fraction-free elimination and stay exact.
    pub fn determinant(&self) -> T {
        self.determinant_with(&LinalgConfig::default())
    }

    pub fn determinant_with(&self, config: &LinalgConfig) -> T {
        if !self.is_square() {
            return T::zero();
        }

        let s = &self.store;
        match self.height() {
            1 => s[(0, 0)],
            2 => s[(0, 0)] * s[(1, 1)] - s[(0, 1)] * s[(1, 0)],
            n if truncates_division::<T>() => {
                let mut reduced = self.store.clone();
                let pass = fraction_free_eliminate(&mut reduced);
                if pass.zero_column.is_some() {
                    return T::zero();
                }
                pass.signed(reduced[(n - 1, n - 1)])
            }
            _ => {
                let mut reduced = self.store.clone();
                let pass = forward_eliminate(&mut reduced, config.pivot_strategy);
                if pass.zero_column.is_some() {
                    return T::zero();
                }
                pass.signed(diagonal_product(&reduced))
            }
        }
    }

    /// True when the determinant is zero. Rectangular matrices count as singular.
    pub fn is_singular(&self) -> bool {
        self.determinant().is_zero()
    }

    /// Inverse through the adjugate: `adj(A) / det(A)`.
    ///
    /// Cofactor expansion costs factorial time in the dimension; meant for
    /// small matrices only.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.inverse_with(&LinalgConfig::default())
    }

    pub fn inverse_with(&self, config: &LinalgConfig) -> Result<Matrix<T>> {
        self.require_square()?;
        if self.height() > config.cofactor_warn_dim {
            warn!(
                "Inverting a {}x{} matrix by cofactor expansion; this grows factorially with size",
                self.height(),
                self.width()
            );
        }

        let det = self.determinant_with(config);
        if det.is_zero() {
            debug!("Refusing to invert a singular {}x{} matrix", self.height(), self.width());
            return Err(LinalgError::Singular);
        }
        Ok(self.adjugate_with(config)?.div_scalar(det))
    }

    /// Reduce to diagonal form with a forward then a backward elimination pass.
    ///
    /// For integer element types both passes are fraction-free, so the
    /// diagonal entries are scaled up rather than truncated.
    pub fn to_diagonal(&self) -> Result<Matrix<T>> {
        self.to_diagonal_with(&LinalgConfig::default())
    }

    pub fn to_diagonal_with(&self, config: &LinalgConfig) -> Result<Matrix<T>> {
        self.require_square()?;

        let exact = truncates_division::<T>();
        let mut reduced = self.store.clone();
        if exact {
            fraction_free_eliminate(&mut reduced);
        } else {
            forward_eliminate(&mut reduced, config.pivot_strategy);
        }
        if let Some(row) = first_degenerate_row(&reduced) {
            return Err(LinalgError::LinearlyDependentRows { row });
        }

        if exact {
            fraction_free_backward(&mut reduced);
        } else {
            backward_eliminate(&mut reduced);
        }
        if let Some(row) = first_degenerate_row(&reduced) {
            return Err(LinalgError::LinearlyDependentRows { row });
        }
        Ok(Matrix { store: reduced })
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    pub fn render(&self, options: &FormatOptions) -> String {
        self.store
            .rows()
            .map(|row| {
                row.iter()
                    .map(|v| match options.precision {
                        Some(p) => format!("{:.*}", p, v),
                        None => format!("{}", v),
                    })
                    .collect::<Vec<_>>()
                    .join(options.column_separator.as_str())
            })
            .collect::<Vec<_>>()
            .join(options.row_separator.as_str())
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare { shape: self.shape() })
        }
    }
}

impl<T> From<Array2<T>> for Matrix<T> {
    fn from(store: Array2<T>) -> Self {
        Matrix { store }
    }
}

impl<T, const H: usize, const W: usize> TryFrom<[[T; W]; H]> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(value: [[T; W]; H]) -> Result<Self> {
        Ok(Matrix {
            store: Array2::try_from(value)?,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.store[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.store[index]
    }
}

impl<'a, 'b, T: Element> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("matrix addition failed: {}", e))
    }
}

impl<'a, 'b, T: Element> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("matrix subtraction failed: {}", e))
    }
}

impl<'a, 'b, T: Element> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.multiply(rhs)
            .unwrap_or_else(|e| panic!("matrix multiplication failed: {}", e))
    }
}

impl<'a, T: Element> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<'a, T: Element> Div<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<'a, T: Element + Neg<Output = T>> Neg for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        Matrix {
            store: self.store.mapv(|&v| -v),
        }
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&FormatOptions::default()))
    }
}
