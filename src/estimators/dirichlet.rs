//! Fixed-concentration Dirichlet entropy estimator.

use ndarray::ArrayView1;
use statrs::function::gamma::digamma;

use crate::errors::Result;
use crate::estimators::traits::{EntropyEstimator, EstimatorResult};
use crate::validation::check_alpha;

/// Posterior-mean entropy under a single symmetric Dirichlet prior with
/// concentration `alpha` (no integration over priors).
///
/// E[H] = ψ(A + 1) − Σ_i (n_i + α)/A · ψ(n_i + α + 1) with A = N + kα,
/// summed over all k bins; the k − n_bins unseen bins enter with n_i = 0.
/// Reports the estimate only: no closed-form uncertainty.
#[derive(Debug, Clone, Copy)]
pub struct DirichletEntropy {
    alpha: f64,
}

impl DirichletEntropy {
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl EntropyEstimator for DirichletEntropy {
    fn algorithm(&self) -> &'static str {
        "dirichlet"
    }

    fn estimate(&self, pk: ArrayView1<'_, i32>, k: f64) -> Result<EstimatorResult> {
        let n: f64 = pk.iter().map(|&c| c as f64).sum();
        let total = n + k * self.alpha;
        if total == 0.0 {
            return Ok(EstimatorResult::new(f64::NAN, None));
        }
        let mut sum_term = 0.0_f64;
        for &c in pk.iter() {
            let a_i = c as f64 + self.alpha;
            if a_i > 0.0 {
                sum_term += a_i * digamma(a_i + 1.0);
            }
        }
        let unseen = (k - pk.len() as f64).max(0.0);
        if unseen > 0.0 && self.alpha > 0.0 {
            sum_term += unseen * self.alpha * digamma(self.alpha + 1.0);
        }
        let estimate = digamma(total + 1.0) - sum_term / total;
        Ok(EstimatorResult::new(estimate, None))
    }
}
