use discrete_entropy::EstimationError;
use discrete_entropy::estimators::{Entropy, EntropyEstimator};

#[test]
fn selection_policy_maps_to_algorithms() {
    assert_eq!(Entropy::new(None, false).unwrap().algorithm(), "nsb");
    assert_eq!(Entropy::new(None, true).unwrap().algorithm(), "plugin");
    assert_eq!(Entropy::new(Some(0.5), false).unwrap().algorithm(), "dirichlet");
    assert_eq!(
        Entropy::new(Some(0.5), true).unwrap().algorithm(),
        "pseudocount"
    );
}

#[test]
fn default_is_nsb() {
    assert_eq!(Entropy::default().algorithm(), "nsb");
    assert_eq!(Entropy::nsb().algorithm(), "nsb");
}

#[test]
fn invalid_alpha_is_rejected_at_selection() {
    for plugin in [false, true] {
        let err = Entropy::new(Some(-1.0), plugin).unwrap_err();
        assert!(matches!(err, EstimationError::Alpha(_)));
    }
}
