use approx::assert_abs_diff_eq;
use discrete_entropy::estimators::{DirichletEntropy, EntropyEstimator};
use ndarray::array;

#[test]
fn dirichlet_hand_check_symmetric_counts() {
    // Counts [1,1], k=2, alpha=1: A = N + k*alpha = 4, every bin has
    // posterior weight (1+1)/4, so
    // E[H] = psi(5) - psi(3) = 1/3 + 1/4 by the digamma recurrence.
    let counts = array![1, 1];
    let est = DirichletEntropy::new(1.0).unwrap();
    let result = est.estimate(counts.view(), 2.0).unwrap();
    assert_abs_diff_eq!(result.estimate, 1.0 / 3.0 + 1.0 / 4.0, epsilon = 1e-12);
    assert!(result.uncertainty.is_none());
}

#[test]
fn dirichlet_counts_unseen_bins() {
    // With alpha > 0 the estimate must depend on the number of unseen bins.
    let counts = array![3, 2];
    let est = DirichletEntropy::new(0.5).unwrap();
    let h_k2 = est.estimate(counts.view(), 2.0).unwrap().estimate;
    let h_k10 = est.estimate(counts.view(), 10.0).unwrap().estimate;
    assert!(h_k10 > h_k2);
    assert!(h_k10 <= 10.0_f64.ln());
}

#[test]
fn dirichlet_is_bounded_by_log_k() {
    let counts = array![5, 5, 5, 5];
    let est = DirichletEntropy::new(1.0).unwrap();
    let h = est.estimate(counts.view(), 4.0).unwrap().estimate;
    assert!(h > 0.0);
    assert!(h <= 4.0_f64.ln());
}

#[test]
fn dirichlet_rejects_invalid_alpha() {
    assert!(DirichletEntropy::new(-1.0).is_err());
    assert!(DirichletEntropy::new(f64::NAN).is_err());
}
