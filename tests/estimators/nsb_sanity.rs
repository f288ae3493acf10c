use approx::assert_abs_diff_eq;
use discrete_entropy::estimators::{EntropyEstimator, NsbEntropy};
use discrete_entropy::{EstimationError, entropy};
use ndarray::array;

#[test]
fn nsb_is_finite_and_bounded() {
    let counts = array![4, 12, 4, 5, 3];
    let result = NsbEntropy.estimate(counts.view(), 5.0).unwrap();
    assert!(result.estimate.is_finite());
    assert!(result.estimate > 0.0);
    assert!(result.estimate < 5.0_f64.ln());
}

#[test]
fn nsb_reports_uncertainty() {
    let counts = array![4, 12, 4, 5, 3];
    let result = NsbEntropy.estimate(counts.view(), 5.0).unwrap();
    let std = result.uncertainty.expect("NSB provides an uncertainty");
    assert!(std.is_finite());
    assert!(std >= 0.0);
}

#[test]
fn nsb_is_deterministic() {
    let counts = array![4, 12, 4, 5, 3];
    let a = NsbEntropy.estimate(counts.view(), 5.0).unwrap();
    let b = NsbEntropy.estimate(counts.view(), 5.0).unwrap();
    assert_abs_diff_eq!(a.estimate, b.estimate, epsilon = 0.0);
}

#[test]
fn nsb_handles_unseen_support() {
    // k equal to the observed bin count is a valid boundary case; extra
    // unseen bins shift the estimate upwards.
    let counts = array![2, 1, 1];
    let h_observed = NsbEntropy.estimate(counts.view(), 3.0).unwrap().estimate;
    let h_extended = NsbEntropy.estimate(counts.view(), 5.0).unwrap().estimate;
    assert!(h_observed.is_finite());
    assert!(h_extended.is_finite());
    assert!(h_extended > h_observed);
}

#[test]
fn nsb_well_sampled_uniform_matches_log_k() {
    let counts = array![250, 250, 250, 250];
    let h = NsbEntropy.estimate(counts.view(), 4.0).unwrap().estimate;
    assert_abs_diff_eq!(h, 4.0_f64.ln(), epsilon = 0.02);
}

#[test]
fn nsb_without_coincidences_is_nan() {
    // Every bin seen once with no unseen support (n == k): the evidence is
    // uninformative.
    let counts = array![1, 1, 1];
    let result = NsbEntropy.estimate(counts.view(), 3.0).unwrap();
    assert!(result.estimate.is_nan());

    // The entry point turns the NaN into a numeric error.
    let err = entropy(&array![1.0, 1.0, 1.0], None, None, false).unwrap_err();
    assert!(matches!(err, EstimationError::Numeric));
}

#[test]
fn nsb_singleton_counts_with_extra_support_are_finite() {
    // Coincidences count against the full alphabet, not the observed bins:
    // all-singleton counts stay estimable whenever k > n.
    let counts = array![1, 1, 1, 1, 1];
    let result = NsbEntropy.estimate(counts.view(), 10.0).unwrap();
    assert!(result.estimate.is_finite());
    assert!(result.estimate > 0.0);
    assert!(result.estimate < 10.0_f64.ln());

    let h = entropy(&array![1.0, 1.0, 1.0, 1.0, 1.0], Some(10.0.into()), None, false).unwrap();
    assert!(h.is_finite());
}

#[test]
fn nsb_accepts_explicit_zero_bins() {
    // Zero-count bins behave like unseen support.
    let padded = array![0, 4, 12, 4, 5, 3, 0];
    let compact = array![4, 12, 4, 5, 3];
    let h_padded = NsbEntropy.estimate(padded.view(), 7.0).unwrap().estimate;
    let h_compact = NsbEntropy.estimate(compact.view(), 7.0).unwrap().estimate;
    assert_abs_diff_eq!(h_padded, h_compact, epsilon = 1e-9);
}
