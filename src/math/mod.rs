//! Storage layer: the row-major `Array2` buffer and the `Element` bound.
//!
//! `Array2` knows nothing about linear algebra. It validates its shape on
//! construction, hands out checked and unchecked element access and exposes
//! its rows as slices for the engine in [`crate::linalg`] to read.
pub mod element;
pub mod matrix;

pub use element::Element;
pub use matrix::Array2;
