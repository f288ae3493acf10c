//! Module containing tests for the entropy estimators.
mod dirichlet_sanity;
mod dispatch;
mod nsb_sanity;
mod pseudocount_sanity;
