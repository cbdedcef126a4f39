//! dense-linalg: small dense matrix and vector types.
//!
//! The crate provides a row-major `Array2` store, a `Matrix` engine on top of
//! it (arithmetic, transpose, determinant, adjugate inverse, diagonalization)
//! and thin `Vector`/`Scalar` views.
//!
//! Everything is single-threaded and value-producing. Elimination is naive
//! (no magnitude pivoting) and inversion uses cofactor expansion, so the
//! crate targets small matrices.
pub mod config;
pub mod error;
pub mod linalg;
pub mod math;

pub use config::{FormatOptions, LinalgConfig, PivotStrategy};
pub use error::{LinalgError, Result};
pub use linalg::{Matrix, Scalar, Vector};
pub use math::{Array2, Element};
