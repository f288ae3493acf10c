//! Jensen-Shannon divergence through the multi-distribution protocol.

use ndarray::{Array1, ArrayView2, Axis};

use crate::errors::Result;
use crate::estimators::entropy::Entropy;
use crate::estimators::traits::{EntropyEstimator, EstimatorResult, MultiPmfEstimator};

/// Jensen-Shannon divergence estimator over a matrix of counts
/// (rows = distributions, columns = shared bins).
///
/// JSD = H(pooled) − Σ_i w_i H(p_i), with weights proportional to each
/// row's sample total and the pooled distribution given by the column sums.
/// All entropies come from one wrapped [`Entropy`] instance; the wrapped
/// algorithm is reported as this estimator's own.
#[derive(Debug, Clone, Copy)]
pub struct JsDivergence {
    entropy: Entropy,
}

impl JsDivergence {
    pub fn new(entropy: Entropy) -> Self {
        Self { entropy }
    }

    pub fn entropy_estimator(&self) -> &Entropy {
        &self.entropy
    }
}

impl Default for JsDivergence {
    fn default() -> Self {
        Self::new(Entropy::nsb())
    }
}

impl MultiPmfEstimator for JsDivergence {
    fn algorithm(&self) -> &'static str {
        self.entropy.algorithm()
    }

    fn estimate(&self, pk: ArrayView2<'_, i32>, k: f64) -> Result<EstimatorResult> {
        let row_totals: Vec<f64> = pk
            .axis_iter(Axis(0))
            .map(|row| row.iter().map(|&c| c as f64).sum())
            .collect();
        let grand_total: f64 = row_totals.iter().sum();
        if grand_total == 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }

        let pooled: Array1<i32> = pk.sum_axis(Axis(0));
        let mut estimate = self.entropy.estimate(pooled.view(), k)?.estimate;
        for (row, total) in pk.axis_iter(Axis(0)).zip(&row_totals) {
            let w = total / grand_total;
            estimate -= w * self.entropy.estimate(row, k)?.estimate;
        }
        Ok(EstimatorResult::new(estimate, None))
    }
}
