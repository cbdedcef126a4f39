use std::error::Error;
use std::fmt;

/// Errors reported by the array store and the matrix engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes differ where an elementwise operation needs them equal.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Inner dimensions do not line up for a product.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Square-only operation called on a rectangular matrix.
    NotSquare { shape: (usize, usize) },
    /// Determinant is zero, no inverse exists.
    Singular,
    /// Elimination produced an all-zero row (or left a zero pivot).
    LinearlyDependentRows { row: usize },
    /// Vector or matrix length unsupported by the operation.
    InvalidDimension { expected: usize, got: usize },
    /// Indexed access outside the stored bounds.
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// Zero rows or zero columns.
    EmptyShape,
    /// `rows * cols` does not fit in `usize`.
    ShapeOverflow { shape: (usize, usize) },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::DimensionMismatch { left, right } => write!(
                f,
                "cannot multiply {}x{} by {}x{}: inner dimensions differ",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::NotSquare { shape } => {
                write!(f, "operation requires a square matrix, got {}x{}", shape.0, shape.1)
            }
            LinalgError::Singular => write!(f, "matrix is singular (determinant is zero)"),
            LinalgError::LinearlyDependentRows { row } => {
                write!(f, "row {} is linearly dependent on the rows above it", row)
            }
            LinalgError::InvalidDimension { expected, got } => {
                write!(f, "invalid dimension: expected {}, got {}", expected, got)
            }
            LinalgError::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
            LinalgError::EmptyShape => write!(f, "matrix must have at least one row and one column"),
            LinalgError::ShapeOverflow { shape } => {
                write!(f, "shape {}x{} overflows the addressable size", shape.0, shape.1)
            }
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;
