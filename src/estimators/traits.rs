// SPDX-License-Identifier: MIT OR Apache-2.0

//! Estimation protocols shared by all entropy estimators.
//!
//! Concrete algorithms implement the `estimate` step over validated counts
//! and a validated cardinality; the provided `fit` wrapper owns validation
//! and cardinality defaulting. Estimators are stateless: each `fit` returns
//! a fresh [`EstimatorResult`] instead of mutating the instance.

use log::warn;
use ndarray::{Array, Array2, ArrayView1, ArrayView2, Dimension};

use crate::errors::Result;
use crate::validation::{Cardinality, check_cardinality, check_counts, check_counts_2d};

/// Outcome of a single estimation: the estimate in nats and, for algorithms
/// that provide one, a measure of uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorResult {
    pub estimate: f64,
    pub uncertainty: Option<f64>,
}

impl EstimatorResult {
    pub fn new(estimate: f64, uncertainty: Option<f64>) -> Self {
        Self {
            estimate,
            uncertainty,
        }
    }
}

/// Protocol for single-distribution entropy estimators.
pub trait EntropyEstimator {
    /// Estimator algorithm name.
    fn algorithm(&self) -> &'static str;

    /// Entropy estimate from validated non-negative counts and a validated
    /// sample-space size `k`. `k` may equal, exceed or (rarely) fall below
    /// the number of bins; algorithms account for the `k - n_bins` unseen
    /// bins where their statistics require it. Deterministic given identical
    /// inputs.
    fn estimate(&self, pk: ArrayView1<'_, i32>, k: f64) -> Result<EstimatorResult>;

    /// Validate counts and cardinality, then run the estimator.
    ///
    /// `pk` is flattened to a single counts vector; `k` defaults to the
    /// number of bins when omitted.
    fn fit<D: Dimension>(
        &self,
        pk: &Array<f64, D>,
        k: Option<&Cardinality>,
    ) -> Result<EstimatorResult>
    where
        Self: Sized,
    {
        let pk = check_counts(pk)?;
        let k = match k {
            Some(k) => check_cardinality(k)?,
            None => pk.len() as f64,
        };
        if k < pk.len() as f64 {
            warn!(
                "cardinality {k} is below the number of bins ({})",
                pk.len()
            );
        }
        self.estimate(pk.view(), k)
    }
}

/// Protocol for estimators that combine several distributions sharing one
/// sample space (rows = distributions, columns = shared bins).
pub trait MultiPmfEstimator {
    /// Name of the underlying entropy algorithm (delegated, not reimplemented).
    fn algorithm(&self) -> &'static str;

    /// Estimate from a validated counts matrix; the algorithm combines
    /// per-row entropy contributions internally.
    fn estimate(&self, pk: ArrayView2<'_, i32>, k: f64) -> Result<EstimatorResult>;

    /// Validate the counts matrix and cardinality, then run the estimator.
    /// `k` defaults to the number of shared bins (columns).
    fn fit(&self, pk: &Array2<f64>, k: Option<&Cardinality>) -> Result<EstimatorResult> {
        let pk = check_counts_2d(pk)?;
        let k = match k {
            Some(k) => check_cardinality(k)?,
            None => pk.ncols() as f64,
        };
        if k < pk.ncols() as f64 {
            warn!(
                "cardinality {k} is below the number of bins ({})",
                pk.ncols()
            );
        }
        self.estimate(pk.view(), k)
    }
}
