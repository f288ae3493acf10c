//! Input validation for counts, cardinalities and concentration parameters.
//!
//! All checks run before any estimator algorithm, so malformed input never
//! reaches the numeric core. Counts arrive as `f64` arrays (whole-number
//! floats are valid counts) and are narrowed to `i32`; cardinalities collapse
//! to a single `f64` scalar.

use ndarray::{Array, Array1, Array2, Dimension};

use crate::errors::{EstimationError, Result};

/// Upper bound on `ln k`: cardinalities must stay below 2^150 so that
/// downstream combinatorial terms do not overflow.
pub const MAX_LOG_CARDINALITY: f64 = 150.0 * std::f64::consts::LN_2;

/// Sample-space cardinality input: a single size, or one size per variable
/// whose product is taken as the effective cardinality.
#[derive(Debug, Clone, PartialEq)]
pub enum Cardinality {
    Scalar(f64),
    PerVariable(Vec<f64>),
}

impl From<f64> for Cardinality {
    fn from(k: f64) -> Self {
        Cardinality::Scalar(k)
    }
}

impl From<usize> for Cardinality {
    fn from(k: usize) -> Self {
        Cardinality::Scalar(k as f64)
    }
}

impl From<Vec<f64>> for Cardinality {
    fn from(ks: Vec<f64>) -> Self {
        Cardinality::PerVariable(ks)
    }
}

impl From<Vec<usize>> for Cardinality {
    fn from(ks: Vec<usize>) -> Self {
        Cardinality::PerVariable(ks.into_iter().map(|k| k as f64).collect())
    }
}

/// Check a concentration parameter / pseudocount weight.
pub fn check_alpha(a: f64) -> Result<f64> {
    if !a.is_finite() || a < 0.0 {
        return Err(EstimationError::Alpha(a));
    }
    Ok(a)
}

fn check_count_element(x: f64) -> Result<i32> {
    if !x.is_finite() || x.fract() != 0.0 {
        return Err(EstimationError::Counts(format!(
            "counts array has non-integer values (got {x})"
        )));
    }
    if x < 0.0 {
        return Err(EstimationError::Counts(format!(
            "counts array has negative values (got {x})"
        )));
    }
    if x > i32::MAX as f64 {
        return Err(EstimationError::Counts(format!(
            "count {x} does not fit a 32-bit integer"
        )));
    }
    Ok(x as i32)
}

/// Check a counts array of any rank, flattening it to a 1D vector of
/// non-negative 32-bit counts.
pub fn check_counts<D: Dimension>(pk: &Array<f64, D>) -> Result<Array1<i32>> {
    if pk.is_empty() {
        return Err(EstimationError::Counts("empty counts array".into()));
    }
    let counts = pk
        .iter()
        .map(|&x| check_count_element(x))
        .collect::<Result<Vec<i32>>>()?;
    Ok(Array1::from(counts))
}

/// Check a matrix of counts where rows are independent distributions sharing
/// one sample space. The rank-2 requirement is carried by the type.
pub fn check_counts_2d(pk: &Array2<f64>) -> Result<Array2<i32>> {
    if pk.is_empty() {
        return Err(EstimationError::Counts("empty counts array".into()));
    }
    let counts = pk
        .iter()
        .map(|&x| check_count_element(x))
        .collect::<Result<Vec<i32>>>()?;
    Array2::from_shape_vec(pk.raw_dim(), counts)
        .map_err(|e| EstimationError::Counts(e.to_string()))
}

fn check_scalar_cardinality(k: f64) -> Result<f64> {
    if !k.is_finite() || k <= 0.0 {
        return Err(EstimationError::Cardinality(format!(
            "k must be a positive number (got {k})"
        )));
    }
    if k.ln() > MAX_LOG_CARDINALITY {
        return Err(EstimationError::Cardinality(
            "k must be smaller than 2^150".into(),
        ));
    }
    if k.fract() != 0.0 {
        return Err(EstimationError::Cardinality(format!(
            "k must be a whole number (got {k})"
        )));
    }
    Ok(k)
}

/// Check a cardinality and collapse it to a scalar. A per-variable sequence
/// is reduced to the product of its elements, guarded through summed logs.
pub fn check_cardinality(k: &Cardinality) -> Result<f64> {
    match k {
        Cardinality::Scalar(k) => check_scalar_cardinality(*k),
        Cardinality::PerVariable(ks) => {
            if ks.is_empty() {
                return Err(EstimationError::Cardinality(
                    "empty cardinality sequence".into(),
                ));
            }
            let mut log_k = 0.0;
            for &k in ks {
                if !k.is_finite() || k <= 0.0 {
                    return Err(EstimationError::Cardinality(format!(
                        "cardinalities must be positive numbers (got {k})"
                    )));
                }
                log_k += k.ln();
            }
            if log_k > MAX_LOG_CARDINALITY {
                return Err(EstimationError::Cardinality(
                    "k must be smaller than 2^150".into(),
                ));
            }
            check_scalar_cardinality(ks.iter().product())
        }
    }
}
