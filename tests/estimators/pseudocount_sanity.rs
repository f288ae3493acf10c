use approx::assert_abs_diff_eq;
use discrete_entropy::estimators::{EntropyEstimator, PluginEntropy, PseudocountEntropy};
use ndarray::array;

#[test]
fn pseudocount_hand_check_with_unseen_bins() {
    // Counts [2,1,1] with k=5 and alpha=1: two unseen bins get one
    // pseudocount each, total mass 4 + 5*1 = 9.
    let counts = array![2, 1, 1];
    let est = PseudocountEntropy::new(1.0).unwrap();
    let result = est.estimate(counts.view(), 5.0).unwrap();

    let probs: [f64; 5] = [3.0 / 9.0, 2.0 / 9.0, 2.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0];
    let expected: f64 = -probs.iter().map(|p| p * p.ln()).sum::<f64>();
    assert_abs_diff_eq!(result.estimate, expected, epsilon = 1e-12);
    assert!(result.uncertainty.is_none());
}

#[test]
fn zero_pseudocounts_reduce_to_plugin() {
    let counts = array![4, 2, 1, 1];
    let est = PseudocountEntropy::new(0.0).unwrap();
    let h_pseudo = est.estimate(counts.view(), 8.0).unwrap().estimate;
    let h_plugin = PluginEntropy.estimate(counts.view(), 8.0).unwrap().estimate;
    assert_abs_diff_eq!(h_pseudo, h_plugin, epsilon = 0.0);
}

#[test]
fn large_alpha_approaches_uniform() {
    let counts = array![10, 1];
    let k = 4.0;
    let est = PseudocountEntropy::new(1e6).unwrap();
    let h = est.estimate(counts.view(), k).unwrap().estimate;
    assert_abs_diff_eq!(h, k.ln(), epsilon = 1e-4);
}

#[test]
fn pseudocount_rejects_negative_alpha() {
    assert!(PseudocountEntropy::new(-0.5).is_err());
}
