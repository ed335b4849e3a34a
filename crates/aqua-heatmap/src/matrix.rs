//! Correlation matrices and their decomposition into cells

use aqua_core::{validate, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a correlation matrix, addressed by variable name and index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationCell {
    pub row_variable: String,
    pub col_variable: String,
    pub value: f64,
    /// Grid row (`y`)
    pub row: usize,
    /// Grid column (`x`)
    pub col: usize,
}

/// Square correlation matrix stored row-major next to its variable names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct CorrelationMatrix {
    variables: Vec<String>,
    values: Vec<f64>,
}

/// Unchecked wire form, validated through [`CorrelationMatrix::new`]
#[derive(Deserialize)]
struct RawMatrix {
    variables: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawMatrix> for CorrelationMatrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::new(raw.values, raw.variables)
    }
}

impl CorrelationMatrix {
    /// Wrap a flattened row-major matrix
    ///
    /// Fails with `InvalidArgument` unless `values.len() == variables.len()²`
    /// and there is at least one variable.
    pub fn new<S: Into<String>>(values: Vec<f64>, variables: Vec<S>) -> Result<Self> {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        validate::ensure_non_empty(&variables, "correlation layout")?;

        let v = variables.len();
        let expected = v.checked_mul(v).ok_or_else(|| {
            Error::InvalidArgument(format!("{v} variables overflow the matrix size"))
        })?;
        if values.len() != expected {
            return Err(Error::size_mismatch(expected, values.len(), "correlation matrix"));
        }

        Ok(Self { variables, values })
    }

    /// Pearson correlation matrix of equal-length columns
    ///
    /// The diagonal is exactly 1. A column with zero variance has no defined
    /// correlation and is reported as 0 against every other column.
    pub fn from_columns<S: Into<String>>(names: Vec<S>, columns: &[Vec<f64>]) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(Error::size_mismatch(names.len(), columns.len(), "column names"));
        }
        validate::ensure_non_empty(columns, "correlation matrix")?;

        let len = columns[0].len();
        if len < 2 {
            return Err(Error::InvalidArgument(format!(
                "correlation needs at least 2 observations per column, got {len}"
            )));
        }
        for column in columns {
            if column.len() != len {
                return Err(Error::size_mismatch(len, column.len(), "correlation columns"));
            }
            validate::ensure_finite(column, "correlation column")?;
        }

        let v = columns.len();
        let mut values = vec![0.0; v * v];
        for y in 0..v {
            values[y * v + y] = 1.0;
            for x in (y + 1)..v {
                let r = pearson(&columns[y], &columns[x]);
                values[y * v + x] = r;
                values[x * v + y] = r;
            }
        }

        Self::new(values, names)
    }

    /// Number of variables (`v`)
    pub fn dimension(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Flattened row-major values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `(row, col)`, `None` out of range
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let v = self.dimension();
        if row < v && col < v {
            self.values.get(row * v + col).copied()
        } else {
            None
        }
    }

    /// Decompose into `v × v` cells in row-major order
    ///
    /// Flat index `y * v + x` becomes the cell `(variables[y], variables[x])`.
    pub fn cells(&self) -> Vec<CorrelationCell> {
        let v = self.dimension();
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let (row, col) = (i / v, i % v);
                CorrelationCell {
                    row_variable: self.variables[row].clone(),
                    col_variable: self.variables[col].clone(),
                    value,
                    row,
                    col,
                }
            })
            .collect()
    }

    /// Upper-triangle pairs with `|r| > threshold`, strongest first
    pub fn strong_pairs(&self, threshold: f64) -> Vec<CorrelationCell> {
        let mut pairs: Vec<CorrelationCell> = self
            .cells()
            .into_iter()
            .filter(|c| c.col > c.row && c.value.abs() > threshold)
            .collect();
        pairs.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));
        pairs
    }
}

/// Verbal strength of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    /// Classify `|r|` against the 0.1 / 0.3 / 0.5 / 0.7 thresholds
    pub fn classify(r: f64) -> Self {
        let r = r.abs();
        if r >= 0.7 {
            Self::VeryStrong
        } else if r >= 0.5 {
            Self::Strong
        } else if r >= 0.3 {
            Self::Moderate
        } else if r >= 0.1 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        };
        f.write_str(s)
    }
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let (dx, dy) = (a - mean_x, b - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom > 0.0 {
        (cov / denom).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
