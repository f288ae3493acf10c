// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the estimation pipeline.
//!
//! Every invariant violation surfaces as one variant of [`EstimationError`];
//! nothing is downgraded to a default. Validation runs before any estimator
//! algorithm, so [`EstimationError::Numeric`] is the only error that can be
//! detected after computation.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EstimationError>;

#[derive(Debug, Error)]
pub enum EstimationError {
    /// Invalid Dirichlet concentration parameter / pseudocount weight.
    #[error("alpha must be a non-negative finite number (got {0})")]
    Alpha(f64),

    /// Invalid counts array (non-integer, negative, out of range or empty).
    #[error("invalid counts array: {0}")]
    Counts(String),

    /// Invalid or oversized sample-space cardinality.
    #[error("invalid cardinality: {0}")]
    Cardinality(String),

    /// A requested axis or variable index is out of range for the array rank.
    #[error("axis {axis} is out of bounds for rank {rank}")]
    Axis { axis: usize, rank: usize },

    /// Requested combination size exceeds the number of variables.
    #[error("combination size {r} is invalid for {p} variables")]
    Histogram { r: usize, p: usize },

    /// The final estimate (or requested uncertainty) is not a number.
    #[error("estimate is NaN")]
    Numeric,
}
