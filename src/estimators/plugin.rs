//! Plugin (maximum-likelihood) and pseudocount entropy estimators.

use ndarray::ArrayView1;

use crate::errors::Result;
use crate::estimators::traits::{EntropyEstimator, EstimatorResult};
use crate::validation::check_alpha;

/// Maximum-likelihood entropy: empirical frequencies inserted into the
/// entropy definition. Ignores unseen bins; no uncertainty term.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginEntropy;

impl EntropyEstimator for PluginEntropy {
    fn algorithm(&self) -> &'static str {
        "plugin"
    }

    fn estimate(&self, pk: ArrayView1<'_, i32>, _k: f64) -> Result<EstimatorResult> {
        let n: f64 = pk.iter().map(|&c| c as f64).sum();
        if n == 0.0 {
            // No samples: undefined, surfaced as NaN for the entry-point guard.
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        // H = ln N - (1/N) sum n_i ln n_i over occupied bins
        let mut acc = 0.0_f64;
        for &c in pk.iter() {
            if c > 0 {
                let c = c as f64;
                acc += c * c.ln();
            }
        }
        Ok(EstimatorResult::new(n.ln() - acc / n, None))
    }
}

/// Plugin estimator over counts augmented with `alpha` pseudocounts in every
/// bin of the sample space, unseen bins included. No uncertainty term.
#[derive(Debug, Clone, Copy)]
pub struct PseudocountEntropy {
    alpha: f64,
}

impl PseudocountEntropy {
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl EntropyEstimator for PseudocountEntropy {
    fn algorithm(&self) -> &'static str {
        "pseudocount"
    }

    fn estimate(&self, pk: ArrayView1<'_, i32>, k: f64) -> Result<EstimatorResult> {
        if self.alpha == 0.0 {
            // Zero pseudocounts reduce to the plain plugin estimate.
            return PluginEntropy.estimate(pk, k);
        }
        let n: f64 = pk.iter().map(|&c| c as f64).sum();
        let unseen = (k - pk.len() as f64).max(0.0);
        let total = n + k * self.alpha;
        if total == 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        let mut h = 0.0_f64;
        for &c in pk.iter() {
            let p = (c as f64 + self.alpha) / total;
            h -= p * p.ln();
        }
        let q = self.alpha / total;
        if unseen > 0.0 && q > 0.0 {
            h -= unseen * q * q.ln();
        }
        Ok(EstimatorResult::new(h, None))
    }
}
