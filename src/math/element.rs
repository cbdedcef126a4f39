use std::fmt;

use num_traits::Num;

/// Numeric element stored in an [`Array2`](crate::math::Array2).
///
/// Blanket-implemented for every `Copy` type with the usual arithmetic, so all
/// primitive integers and floats qualify. Integer division truncates, so the
/// elimination routines switch to fraction-free arithmetic for those types.
pub trait Element: Num + Copy + fmt::Debug + fmt::Display {}

impl<T> Element for T where T: Num + Copy + fmt::Debug + fmt::Display {}
