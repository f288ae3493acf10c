use approx::assert_abs_diff_eq;
use discrete_entropy::estimators::Entropy;
use discrete_entropy::{
    Cardinality, EstimationError, entropy, from_data, from_data_combinations, from_data_with,
    histogram,
};
use ndarray::array;

#[test]
fn round_trips_through_histogram_and_entropy() {
    // For a single variable the default joint cardinality is the number of
    // observed values, matching the default of the counts-level entry point.
    let data = array![0, 0, 1, 1, 2, 2, 0];
    let counts = histogram(&data, 0).unwrap().mapv(|c| c as f64);
    let direct = entropy(&counts, None, None, false).unwrap();
    let from_samples = from_data(&data, None, 0).unwrap();
    assert_abs_diff_eq!(from_samples, direct, epsilon = 1e-12);
}

#[test]
fn plugin_joint_entropy_hand_check() {
    // Joint outcomes (0,0), (0,1), (1,0), (1,1) once each: H = ln 4.
    let data = array![[0, 0], [0, 1], [1, 0], [1, 1]];
    let estimator = Entropy::new(None, true).unwrap();
    let h = from_data_with(&data, None, 0, &estimator).unwrap();
    assert_abs_diff_eq!(h, 4.0_f64.ln(), epsilon = 1e-12);
}

#[test]
fn per_variable_cardinalities_multiply() {
    // Two binary variables declared with alphabet size 3 each: the joint
    // sample space has 9 bins for the pseudocount estimator.
    let data = array![[0, 0], [0, 1], [1, 0], [1, 1]];
    let estimator = Entropy::new(Some(1.0), true).unwrap();
    let with_ks = from_data_with(
        &data,
        Some(Cardinality::PerVariable(vec![3.0, 3.0])),
        0,
        &estimator,
    )
    .unwrap();
    let counts = histogram(&data, 0).unwrap().mapv(|c| c as f64);
    let direct = entropy(&counts, Some(9.0.into()), Some(1.0), true).unwrap();
    assert_abs_diff_eq!(with_ks, direct, epsilon = 1e-12);
}

#[test]
fn cardinality_sequence_must_match_variable_count() {
    let data = array![[0, 0], [0, 1], [1, 0], [1, 1]];
    let err = from_data(&data, Some(Cardinality::PerVariable(vec![2.0])), 0).unwrap_err();
    assert!(matches!(err, EstimationError::Cardinality(_)));
}

#[test]
fn combinations_reject_scalar_cardinality() {
    let data = array![[0, 0], [0, 1], [1, 0], [1, 1]];
    let err = from_data_combinations(&data, Some(Cardinality::Scalar(4.0)), 0, 1).unwrap_err();
    assert!(matches!(err, EstimationError::Cardinality(_)));
}

#[test]
fn combination_estimates_pair_counts_with_cardinalities() {
    // r = 1 over two variables: one estimate per variable, equal to the
    // single-variable estimates.
    let data = array![[0, 5], [0, 5], [1, 6], [1, 5], [0, 6], [1, 5]];
    let estimates: Vec<f64> = from_data_combinations(&data, None, 0, 1)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(estimates.len(), 2);
    let h0 = from_data(&data.column(0).to_owned(), None, 0).unwrap();
    let h1 = from_data(&data.column(1).to_owned(), None, 0).unwrap();
    assert_abs_diff_eq!(estimates[0], h0, epsilon = 1e-9);
    assert_abs_diff_eq!(estimates[1], h1, epsilon = 1e-9);
}

#[test]
fn pair_combinations_have_binomial_count() {
    let data = array![
        [0, 0, 1],
        [1, 0, 1],
        [0, 1, 0],
        [1, 1, 0],
        [0, 0, 0],
        [1, 1, 1],
    ];
    let estimates: Vec<_> = from_data_combinations(&data, None, 0, 2)
        .unwrap()
        .collect();
    assert_eq!(estimates.len(), 3);
}
