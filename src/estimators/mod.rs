// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entropy estimators and their shared protocols.

pub mod dirichlet;
pub mod divergence;
pub mod entropy;
pub mod nsb;
pub mod plugin;
pub mod traits;

// Unified re-exports so users can import estimators ergonomically.
pub use dirichlet::DirichletEntropy;
pub use divergence::JsDivergence;
pub use entropy::Entropy;
pub use nsb::NsbEntropy;
pub use plugin::{PluginEntropy, PseudocountEntropy};
pub use traits::{EntropyEstimator, EstimatorResult, MultiPmfEstimator};
