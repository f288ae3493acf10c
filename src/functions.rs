//! Public entry points: entropy and divergence from counts, and data-level
//! estimation (histograms, joint entropies, mutual/interaction information,
//! conditional entropy) from raw sample arrays.
//!
//! Data-level functions reshape input into a (variables × samples) layout,
//! histogram it over variable subsets and feed the counts to a configured
//! estimator (NSB by default). Combination variants return lazy single-pass
//! iterators; restart one by calling the producing function again.

use log::debug;
use ndarray::{Array, Array1, Array2, Dimension};

use crate::data::DataArray;
use crate::errors::{EstimationError, Result};
use crate::estimators::divergence::JsDivergence;
use crate::estimators::entropy::Entropy;
use crate::estimators::traits::{EntropyEstimator, MultiPmfEstimator};
use crate::histogram::{CombinationHistograms, Combinations, joint_counts};
use crate::validation::{Cardinality, check_cardinality};

/// Entropy estimate (nats) from an array of counts.
///
/// `k` is the total number of bins including unobserved ones and defaults to
/// the number of bins in `pk`. `alpha` and `plugin` select the algorithm
/// (see [`Entropy::new`]). Fails with a numeric error when the estimate is
/// NaN.
pub fn entropy<D: Dimension>(
    pk: &Array<f64, D>,
    k: Option<Cardinality>,
    alpha: Option<f64>,
    plugin: bool,
) -> Result<f64> {
    let result = Entropy::new(alpha, plugin)?.fit(pk, k.as_ref())?;
    if result.estimate.is_nan() {
        return Err(EstimationError::Numeric);
    }
    Ok(result.estimate)
}

/// Like [`entropy`], also returning the algorithm's uncertainty when it
/// provides one. Fails with a numeric error when either value is NaN.
pub fn entropy_with_std<D: Dimension>(
    pk: &Array<f64, D>,
    k: Option<Cardinality>,
    alpha: Option<f64>,
    plugin: bool,
) -> Result<(f64, Option<f64>)> {
    let result = Entropy::new(alpha, plugin)?.fit(pk, k.as_ref())?;
    if result.estimate.is_nan() {
        return Err(EstimationError::Numeric);
    }
    if let Some(std) = result.uncertainty {
        if std.is_nan() {
            return Err(EstimationError::Numeric);
        }
    }
    Ok((result.estimate, result.uncertainty))
}

/// Jensen-Shannon divergence from a matrix of counts (rows = distributions,
/// columns = shared bins), weighted by each row's sample total.
pub fn jensen_shannon_divergence(
    pk: &Array2<f64>,
    k: Option<Cardinality>,
    alpha: Option<f64>,
    plugin: bool,
) -> Result<f64> {
    let estimator = JsDivergence::new(Entropy::new(alpha, plugin)?);
    let result = estimator.fit(pk, k.as_ref())?;
    if result.estimate.is_nan() {
        return Err(EstimationError::Numeric);
    }
    Ok(result.estimate)
}

/// Joint bin counts over the full (possibly multi-variable) alphabet:
/// distinct joint value combinations counted once each.
pub fn histogram<D: Dimension>(ar: &Array<i32, D>, axis: usize) -> Result<Array1<i32>> {
    let data = DataArray::new(ar, axis)?;
    Ok(joint_counts(data.select(&all_variables(&data))?.view()))
}

/// Lazy sequence of joint bin counts, one per size-`r` combination of
/// variables, in canonical lexicographic index order.
pub fn histogram_combinations<D: Dimension>(
    ar: &Array<i32, D>,
    axis: usize,
    r: usize,
) -> Result<CombinationHistograms> {
    CombinationHistograms::new(DataArray::new(ar, axis)?, r)
}

/// Entropy estimate over the joint alphabet of a raw sample array, using the
/// default Bayesian (NSB) estimator. Per-variable cardinalities `ks` default
/// to the observed alphabet sizes; their product is the joint cardinality.
pub fn from_data<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
) -> Result<f64> {
    from_data_with(ar, ks, axis, &Entropy::nsb())
}

/// [`from_data`] with a caller-configured estimator.
pub fn from_data_with<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
    estimator: &Entropy,
) -> Result<f64> {
    let data = DataArray::new(ar, axis)?;
    debug!(
        "estimating joint entropy over {} variables, {} samples",
        data.n_variables(),
        data.n_samples()
    );
    match resolve_ks(&data, ks.as_ref())? {
        ResolvedKs::Scalar(k) => {
            let counts = joint_counts(data.select(&all_variables(&data))?.view());
            Ok(estimator.estimate(counts.view(), k)?.estimate)
        }
        ResolvedKs::PerVariable(ks) => {
            subset_entropy(estimator, &data, &all_variables(&data), &ks)
        }
    }
}

/// Lazy sequence of entropy estimates, one per size-`r` variable
/// combination, each paired with the product of the matching per-variable
/// cardinalities.
pub fn from_data_combinations<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
    r: usize,
) -> Result<EntropyCombinations> {
    let data = DataArray::new(ar, axis)?;
    let ks = resolve_ks_sequence(&data, ks.as_ref())?;
    let p = data.n_variables();
    if r == 0 || r > p {
        return Err(EstimationError::Histogram { r, p });
    }
    Ok(EntropyCombinations {
        combinations: Combinations::new(p, r),
        data,
        ks,
        estimator: Entropy::nsb(),
    })
}

/// Single-pass iterator of per-combination joint entropy estimates.
#[derive(Debug)]
pub struct EntropyCombinations {
    data: DataArray,
    ks: Vec<f64>,
    combinations: Combinations,
    estimator: Entropy,
}

impl Iterator for EntropyCombinations {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Result<f64>> {
        let subset = self.combinations.next()?;
        Some(subset_entropy(&self.estimator, &self.data, &subset, &self.ks))
    }
}

/// (Multivariate) mutual information over all variables of a raw sample
/// array, by inclusion-exclusion over the non-empty variable subsets.
pub fn mutual_information<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
) -> Result<f64> {
    mutual_information_with(ar, ks, axis, &Entropy::nsb())
}

/// [`mutual_information`] with a caller-configured estimator.
pub fn mutual_information_with<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
    estimator: &Entropy,
) -> Result<f64> {
    let data = DataArray::new(ar, axis)?;
    let ks = resolve_ks_sequence(&data, ks.as_ref())?;
    subset_inclusion_exclusion(estimator, &data, &ks, SignConvention::Mutual)
}

/// Lazy sequence of mutual information estimates, one per size-`r`
/// combination of variables.
pub fn mutual_information_combinations<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
    r: usize,
) -> Result<MutualInformationCombinations> {
    let data = DataArray::new(ar, axis)?;
    let ks = resolve_ks_sequence(&data, ks.as_ref())?;
    let p = data.n_variables();
    if r == 0 || r > p {
        return Err(EstimationError::Histogram { r, p });
    }
    Ok(MutualInformationCombinations {
        combinations: Combinations::new(p, r),
        data,
        ks,
        estimator: Entropy::nsb(),
    })
}

/// Single-pass iterator of per-combination mutual information estimates.
pub struct MutualInformationCombinations {
    data: DataArray,
    ks: Vec<f64>,
    combinations: Combinations,
    estimator: Entropy,
}

impl Iterator for MutualInformationCombinations {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Result<f64>> {
        let subset = self.combinations.next()?;
        let sub = match self.data.select(&subset) {
            Ok(rows) => DataArray::from_canonical(rows),
            Err(e) => return Some(Err(e)),
        };
        let sub_ks: Vec<f64> = subset.iter().map(|&i| self.ks[i]).collect();
        Some(subset_inclusion_exclusion(
            &self.estimator,
            &sub,
            &sub_ks,
            SignConvention::Mutual,
        ))
    }
}

/// Interaction information over all variables: the inclusion-exclusion sum
/// with signs `(-1)^(p - r)`, negated. Coincides with mutual information for
/// two variables.
pub fn interaction_information<D: Dimension>(
    ar: &Array<i32, D>,
    ks: Option<Cardinality>,
    axis: usize,
) -> Result<f64> {
    let data = DataArray::new(ar, axis)?;
    let ks = resolve_ks_sequence(&data, ks.as_ref())?;
    subset_inclusion_exclusion(&Entropy::nsb(), &data, &ks, SignConvention::Interaction)
}

/// Conditional entropy of the full variable set given the conditioning
/// variables `c`: H(all) − H(c).
pub fn conditional_entropy<D: Dimension>(
    ar: &Array<i32, D>,
    c: &[usize],
    ks: Option<Cardinality>,
    axis: usize,
) -> Result<f64> {
    let data = DataArray::new(ar, axis)?;
    let ks = resolve_ks_sequence(&data, ks.as_ref())?;
    let estimator = Entropy::nsb();
    let h_joint = subset_entropy(&estimator, &data, &all_variables(&data), &ks)?;
    let h_cond = subset_entropy(&estimator, &data, c, &ks)?;
    Ok(h_joint - h_cond)
}

fn all_variables(data: &DataArray) -> Vec<usize> {
    (0..data.n_variables()).collect()
}

enum ResolvedKs {
    Scalar(f64),
    PerVariable(Vec<f64>),
}

/// Resolve a cardinality argument against the data: defaults to the observed
/// per-variable alphabet sizes; sequences must have one entry per variable.
fn resolve_ks(data: &DataArray, ks: Option<&Cardinality>) -> Result<ResolvedKs> {
    match ks {
        None => Ok(ResolvedKs::PerVariable(
            data.ks().iter().map(|&k| k as f64).collect(),
        )),
        Some(Cardinality::Scalar(k)) => Ok(ResolvedKs::Scalar(check_cardinality(
            &Cardinality::Scalar(*k),
        )?)),
        Some(Cardinality::PerVariable(ks)) => {
            if ks.len() != data.n_variables() {
                return Err(EstimationError::Cardinality(format!(
                    "ks should have length {} (got {})",
                    data.n_variables(),
                    ks.len()
                )));
            }
            check_cardinality(&Cardinality::PerVariable(ks.clone()))?;
            Ok(ResolvedKs::PerVariable(ks.clone()))
        }
    }
}

/// As [`resolve_ks`], but rejects scalar input: combination-based estimates
/// need one cardinality per variable.
fn resolve_ks_sequence(data: &DataArray, ks: Option<&Cardinality>) -> Result<Vec<f64>> {
    match resolve_ks(data, ks)? {
        ResolvedKs::PerVariable(ks) => Ok(ks),
        ResolvedKs::Scalar(_) => Err(EstimationError::Cardinality(
            "per-combination estimates need one cardinality per variable".into(),
        )),
    }
}

/// Joint entropy of a variable subset: histogram the subset's sample columns
/// and estimate with the product of the subset's cardinalities.
fn subset_entropy(
    estimator: &Entropy,
    data: &DataArray,
    subset: &[usize],
    ks: &[f64],
) -> Result<f64> {
    let counts = joint_counts(data.select(subset)?.view());
    let sub_ks: Vec<f64> = subset.iter().map(|&i| ks[i]).collect();
    let k = check_cardinality(&Cardinality::PerVariable(sub_ks))?;
    Ok(estimator.estimate(counts.view(), k)?.estimate)
}

enum SignConvention {
    /// `-Σ_{r=1}^{p} (-1)^r Σ H(size-r subsets)`
    Mutual,
    /// `-Σ_{r=1}^{p} (-1)^(p-r) Σ H(size-r subsets)`
    Interaction,
}

/// Inclusion-exclusion combination of joint entropies over every non-empty
/// variable subset.
fn subset_inclusion_exclusion(
    estimator: &Entropy,
    data: &DataArray,
    ks: &[f64],
    convention: SignConvention,
) -> Result<f64> {
    let p = data.n_variables();
    let mut info = 0.0_f64;
    for r in 1..=p {
        let exponent = match convention {
            SignConvention::Mutual => r,
            SignConvention::Interaction => p - r,
        };
        let sign = if exponent % 2 == 0 { 1.0 } else { -1.0 };
        for subset in Combinations::new(p, r) {
            info += sign * subset_entropy(estimator, data, &subset, ks)?;
        }
    }
    Ok(-info)
}
