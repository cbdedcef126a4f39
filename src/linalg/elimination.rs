//! Gaussian elimination passes shared by the determinant and diagonalization.
//!
//! Both passes work in place on a square [`Array2`] and loop explicitly over
//! pivot columns. There is no magnitude-based pivoting; with
//! [`PivotStrategy::RowSwap`] a row exchange only happens when the pivot is
//! exactly zero.
//!
//! Element types whose division truncates (the primitive integers) go through
//! the fraction-free variants instead, where every division is exact.

use log::{debug, trace};

use crate::config::PivotStrategy;
use crate::math::{Array2, Element};

/// Outcome of a forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ForwardPass {
    /// Number of row exchanges performed. Each one flips the determinant sign.
    pub swaps: usize,
    /// First pivot column whose entries at and below the diagonal were all zero.
    pub zero_column: Option<usize>,
}

impl ForwardPass {
    pub fn is_odd_permutation(&self) -> bool {
        self.swaps % 2 == 1
    }

    /// Negate `value` when the row exchanges form an odd permutation.
    pub fn signed<T: Element>(&self, value: T) -> T {
        if self.is_odd_permutation() {
            T::zero() - value
        } else {
            value
        }
    }
}

/// True when `T`'s division truncates, as it does for the primitive integers.
pub(crate) fn truncates_division<T: Element>() -> bool {
    let two = T::one() + T::one();
    (T::one() / two).is_zero()
}

/// Swap a lower row with a non-zero entry in column `c` into the pivot slot.
/// Returns false when the column is zero at and below the diagonal.
fn swap_in_pivot<T: Element>(store: &mut Array2<T>, c: usize, pass: &mut ForwardPass) -> bool {
    match (c + 1..store.height()).find(|&r| !store[(r, c)].is_zero()) {
        Some(r) => {
            debug!("Zero pivot in column {}, swapping rows {} and {}", c, c, r);
            store.swap_rows(c, r);
            pass.swaps += 1;
            true
        }
        None => {
            trace!("Column {} is already eliminated below the diagonal", c);
            pass.zero_column.get_or_insert(c);
            false
        }
    }
}

/// Reduce `store` to upper-triangular form.
///
/// For each pivot column `c` in `0..n-1`, every row `i > c` has
/// `store[i][c] / store[c][c]` times row `c` subtracted from it.
pub(crate) fn forward_eliminate<T: Element>(
    store: &mut Array2<T>,
    strategy: PivotStrategy,
) -> ForwardPass {
    let n = store.height();
    let width = store.width();
    let mut pass = ForwardPass::default();

    for c in 0..n.saturating_sub(1) {
        if store[(c, c)].is_zero()
            && strategy == PivotStrategy::RowSwap
            && !swap_in_pivot(store, c, &mut pass)
        {
            continue;
        }

        let pivot = store[(c, c)];
        for i in c + 1..n {
            let factor = store[(i, c)] / pivot;
            for j in c..width {
                let delta = factor * store[(c, j)];
                store[(i, j)] = store[(i, j)] - delta;
            }
        }
        trace!("Eliminated below pivot ({}, {})", c, c);
    }

    pass
}

/// Bareiss fraction-free reduction to upper-triangular form.
///
/// Row `i` below pivot `c` becomes `(a_ij * a_cc - a_ic * a_cj) / p`, where `p`
/// is the previous pivot; the division is always exact. The last diagonal
/// entry then equals the determinant up to the sign of the row exchanges.
/// Zero pivots are always swapped out. A zero column stops the reduction,
/// leaving the zero on the diagonal.
pub(crate) fn fraction_free_eliminate<T: Element>(store: &mut Array2<T>) -> ForwardPass {
    let n = store.height();
    let width = store.width();
    let mut pass = ForwardPass::default();
    let mut previous = T::one();

    for c in 0..n.saturating_sub(1) {
        if store[(c, c)].is_zero() && !swap_in_pivot(store, c, &mut pass) {
            break;
        }

        let pivot = store[(c, c)];
        for i in c + 1..n {
            let lead = store[(i, c)];
            for j in c + 1..width {
                let cross = store[(i, j)] * pivot - lead * store[(c, j)];
                store[(i, j)] = cross / previous;
            }
            store[(i, c)] = T::zero();
        }
        previous = pivot;
        trace!("Fraction-free elimination below pivot ({}, {})", c, c);
    }

    pass
}

/// Clear the entries above the diagonal of an upper-triangular `store`,
/// walking pivot columns from the last to the first.
///
/// The diagonal must be free of zeros.
pub(crate) fn backward_eliminate<T: Element>(store: &mut Array2<T>) {
    let n = store.height();
    let width = store.width();

    for c in (1..n).rev() {
        let pivot = store[(c, c)];
        for i in 0..c {
            let factor = store[(i, c)] / pivot;
            for j in 0..width {
                let delta = factor * store[(c, j)];
                store[(i, j)] = store[(i, j)] - delta;
            }
        }
        trace!("Eliminated above pivot ({}, {})", c, c);
    }
}

/// Backward pass without division: row `i` above pivot `c` becomes
/// `a_cc * row_i - a_ic * row_c`. Diagonal entries grow but stay exact.
///
/// The diagonal must be free of zeros.
pub(crate) fn fraction_free_backward<T: Element>(store: &mut Array2<T>) {
    let n = store.height();
    let width = store.width();

    for c in (1..n).rev() {
        let pivot = store[(c, c)];
        for i in 0..c {
            let lead = store[(i, c)];
            for j in 0..width {
                store[(i, j)] = store[(i, j)] * pivot - lead * store[(c, j)];
            }
        }
        trace!("Fraction-free elimination above pivot ({}, {})", c, c);
    }
}

/// Index of the first row that is zero everywhere, or whose diagonal entry
/// is zero (a triangular matrix with a zero pivot has dependent rows).
pub(crate) fn first_degenerate_row<T: Element>(store: &Array2<T>) -> Option<usize> {
    (0..store.height()).find(|&r| store.is_zero_row(r) || store[(r, r)].is_zero())
}

/// Product of the diagonal entries.
pub(crate) fn diagonal_product<T: Element>(store: &Array2<T>) -> T {
    (0..store.height().min(store.width())).fold(T::one(), |acc, i| acc * store[(i, i)])
}
