use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for the elimination routines and text rendering.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinalgConfig {
    #[serde(default)]
    pub pivot_strategy: PivotStrategy,

    /// Cofactor inversion above this dimension logs a cost warning.
    #[serde(default = "default_cofactor_warn_dim")]
    pub cofactor_warn_dim: usize,

    #[serde(default)]
    pub format: FormatOptions,
}

fn default_cofactor_warn_dim() -> usize {
    8
}

/// What forward elimination does when it meets a zero pivot.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    /// Swap in the first lower row with a non-zero entry in the pivot column.
    RowSwap,
    /// Divide by the pivot whatever it is, so a zero pivot gives
    /// infinities/NaN. Integer elements use exact fraction-free elimination,
    /// which always swaps.
    Strict,
}

impl Default for PivotStrategy {
    fn default() -> Self {
        PivotStrategy::RowSwap
    }
}

impl FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row_swap" | "rowswap" | "row-swap" => Ok(PivotStrategy::RowSwap),
            "strict" => Ok(PivotStrategy::Strict),
            _ => Err(format!(
                "Unknown pivot strategy: {}. Expected one of `row_swap` or `strict`",
                s
            )),
        }
    }
}

/// Options for [`crate::linalg::Matrix::render`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal point; `None` uses the element's own `Display`.
    pub precision: Option<usize>,
    pub column_separator: String,
    pub row_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: None,
            column_separator: " ".to_string(),
            row_separator: "\n".to_string(),
        }
    }
}

impl LinalgConfig {
    pub fn new(pivot_strategy: PivotStrategy) -> Self {
        Self {
            pivot_strategy,
            ..Self::default()
        }
    }
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            pivot_strategy: PivotStrategy::RowSwap,
            cofactor_warn_dim: default_cofactor_warn_dim(),
            format: FormatOptions::default(),
        }
    }
}
