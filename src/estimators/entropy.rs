//! Entropy estimator selection.

use log::debug;
use ndarray::ArrayView1;

use crate::errors::Result;
use crate::estimators::dirichlet::DirichletEntropy;
use crate::estimators::nsb::NsbEntropy;
use crate::estimators::plugin::{PluginEntropy, PseudocountEntropy};
use crate::estimators::traits::{EntropyEstimator, EstimatorResult};

#[derive(Debug, Clone, Copy)]
enum Algorithm {
    Nsb(NsbEntropy),
    Dirichlet(DirichletEntropy),
    Plugin(PluginEntropy),
    Pseudocount(PseudocountEntropy),
}

/// Configured entropy estimator selecting one of the concrete algorithms.
///
/// Selection policy: no alpha and no plugin → NSB; plugin without alpha →
/// maximum likelihood; alpha without plugin → fixed-concentration Dirichlet;
/// alpha with plugin → pseudocount plugin.
#[derive(Debug, Clone, Copy)]
pub struct Entropy {
    algorithm: Algorithm,
}

impl Entropy {
    pub fn new(alpha: Option<f64>, plugin: bool) -> Result<Self> {
        let algorithm = match (alpha, plugin) {
            (None, false) => Algorithm::Nsb(NsbEntropy),
            (None, true) => Algorithm::Plugin(PluginEntropy),
            (Some(a), false) => Algorithm::Dirichlet(DirichletEntropy::new(a)?),
            (Some(a), true) => Algorithm::Pseudocount(PseudocountEntropy::new(a)?),
        };
        let estimator = Self { algorithm };
        debug!("selected entropy algorithm: {}", estimator.algorithm());
        Ok(estimator)
    }

    /// The default Bayesian configuration.
    pub fn nsb() -> Self {
        Self {
            algorithm: Algorithm::Nsb(NsbEntropy),
        }
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::nsb()
    }
}

impl EntropyEstimator for Entropy {
    fn algorithm(&self) -> &'static str {
        match &self.algorithm {
            Algorithm::Nsb(e) => e.algorithm(),
            Algorithm::Dirichlet(e) => e.algorithm(),
            Algorithm::Plugin(e) => e.algorithm(),
            Algorithm::Pseudocount(e) => e.algorithm(),
        }
    }

    fn estimate(&self, pk: ArrayView1<'_, i32>, k: f64) -> Result<EstimatorResult> {
        match &self.algorithm {
            Algorithm::Nsb(e) => e.estimate(pk, k),
            Algorithm::Dirichlet(e) => e.estimate(pk, k),
            Algorithm::Plugin(e) => e.estimate(pk, k),
            Algorithm::Pseudocount(e) => e.estimate(pk, k),
        }
    }
}
