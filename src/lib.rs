// SPDX-License-Identifier: MIT OR Apache-2.0

//! # discrete-entropy
//!
//! Bayesian estimation of Shannon entropy and entropy-derived quantities
//! (Jensen-Shannon divergence, mutual information, interaction information,
//! conditional entropy) from discrete count data.
//!
//! ## Quick Start
//!
//! ```rust
//! use discrete_entropy::{entropy, from_data, mutual_information};
//! use ndarray::array;
//!
//! // Bayesian (NSB) entropy estimate from counts, in nats
//! let counts = array![4.0, 12.0, 4.0, 5.0, 3.0];
//! let h = entropy(&counts, None, None, false).unwrap();
//!
//! // Pseudocount estimate spreading alpha = 1 over 8 bins, observed or not
//! let h_pc = entropy(&counts, Some(8.0.into()), Some(1.0), true).unwrap();
//!
//! // Joint entropy straight from samples (n samples x p variables)
//! let samples = array![[0, 1], [1, 1], [0, 0], [1, 0], [0, 1], [0, 1]];
//! let h_joint = from_data(&samples, None, 0).unwrap();
//! let mi = mutual_information(&samples, None, 0).unwrap();
//! ```
//!
//! ## Estimators
//!
//! | `alpha` | `plugin` | Algorithm | Uncertainty |
//! |---------|----------|-----------|-------------|
//! | `None` | `false` | NSB (Bayesian, integrates over Dirichlet priors) | yes |
//! | `None` | `true` | plugin / maximum likelihood | no |
//! | `Some` | `false` | fixed-concentration Dirichlet posterior mean | no |
//! | `Some` | `true` | pseudocount-augmented plugin | no |
//!
//! All estimates are in nats. Counts are validated before any algorithm runs
//! (whole-number, non-negative); cardinalities may be scalars or
//! per-variable sequences collapsed to their product, bounded by 2^150.
//!
//! ## Layers
//!
//! 1. **Entry points** ([`functions`], re-exported at the root): counts-level
//!    `entropy` / `jensen_shannon_divergence` and data-level `histogram`,
//!    `from_data`, `mutual_information`, `interaction_information`,
//!    `conditional_entropy`, plus lazy `_combinations` variants.
//! 2. **Estimators** ([`estimators`]): the [`estimators::EntropyEstimator`]
//!    and [`estimators::MultiPmfEstimator`] protocols and the concrete
//!    algorithms behind the [`estimators::Entropy`] dispatcher.
//! 3. **Data layer** (the `data` and `histogram` modules): canonical
//!    (variables × samples) reshaping and combination histogramming.
//!
//! Estimation is synchronous and allocation-light; estimators are stateless
//! values returning fresh results, so they can be reused and shared freely.
//! Combination iterators and [`data::DataArray`] are single-pass /
//! single-thread respectively and documented as such.

pub mod data;
pub mod errors;
pub mod estimators;
pub mod functions;
pub mod histogram;
pub mod validation;

pub use data::{DataArray, as_data_array};
pub use errors::{EstimationError, Result};
pub use functions::{
    conditional_entropy, entropy, entropy_with_std, from_data, from_data_combinations,
    from_data_with, histogram, histogram_combinations, interaction_information,
    jensen_shannon_divergence, mutual_information, mutual_information_combinations,
    mutual_information_with,
};
pub use validation::Cardinality;
