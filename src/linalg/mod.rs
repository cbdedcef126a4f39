//! Matrix engine built on [`Array2`](crate::math::Array2).
//!
//! [`Matrix`] carries the arithmetic and the elimination-based algorithms.
//! [`Vector`] and [`Scalar`] are shape-constrained views of it.
mod elimination;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
