use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use num_traits::Zero;

use crate::error::{LinalgError, Result};

/// Row-major dense 2D buffer. Always at least 1x1.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Cell count of a `rows x cols` array, rejecting empty and overflowing shapes.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyShape);
    }
    rows.checked_mul(cols)
        .ok_or(LinalgError::ShapeOverflow { shape: (rows, cols) })
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != checked_len(rows, cols)? {
            return Err(LinalgError::ShapeMismatch {
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// A `1 x 1` array holding `value`.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LinalgError::EmptyShape);
        }

        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(LinalgError::ShapeMismatch {
                    left: (height, width),
                    right: (1, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LinalgError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// Read-only view of the buffer, one slice per row.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows && b < self.rows, "row index out of bounds");
        if a == b {
            return;
        }
        for col in 0..self.cols {
            let (ia, ib) = (self.offset(a, col), self.offset(b, col));
            self.data.swap(ia, ib);
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two equally shaped arrays cell by cell.
    pub fn zip_map<U, F>(&self, other: &Array2<T>, mut f: F) -> Result<Array2<U>>
    where
        F: FnMut(&T, &T) -> U,
    {
        if self.shape() != other.shape() {
            return Err(LinalgError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Array2 {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Copy> Array2<T> {
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Self::from_shape_vec((rows, cols), vec![value; len])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    /// Copy with rows and columns exchanged.
    pub fn transpose(&self) -> Array2<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Array2 {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Copy + Zero> Array2<T> {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_elem(rows, cols, T::zero())
    }

    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row_slice(row).iter().all(|v| v.is_zero())
    }
}

impl<T, const H: usize, const W: usize> TryFrom<[[T; W]; H]> for Array2<T> {
    type Error = LinalgError;

    fn try_from(value: [[T; W]; H]) -> Result<Self> {
        let data: Vec<T> = value.into_iter().flatten().collect();
        Self::from_shape_vec((H, W), data)
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for {}x{} array",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for {}x{} array",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
