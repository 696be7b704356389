use super::*;

// -----------------------------------------------------------------------
// alpha validation
// -----------------------------------------------------------------------

#[test]
fn zero_alpha_is_rejected() {
    assert_eq!(
        ScoreNormalizer::new(0.0),
        Err(TextUtilError::InvalidAlpha { alpha: 0.0 })
    );
}

#[test]
fn negative_alpha_is_rejected() {
    let result = normalize(1.0, -15.0);
    assert!(
        matches!(result, Err(TextUtilError::InvalidAlpha { alpha }) if alpha == -15.0),
        "expected InvalidAlpha(-15), got: {result:?}"
    );
}

#[test]
fn non_finite_alpha_is_rejected() {
    assert!(ScoreNormalizer::new(f64::NAN).is_err());
    assert!(ScoreNormalizer::new(f64::INFINITY).is_err());
    assert!(ScoreNormalizer::new(f64::NEG_INFINITY).is_err());
}

#[test]
fn tiny_positive_alpha_is_accepted() {
    let n = ScoreNormalizer::new(f64::MIN_POSITIVE).unwrap();
    assert_eq!(n.alpha(), f64::MIN_POSITIVE);
}

#[test]
fn default_uses_reference_alpha() {
    assert_eq!(ScoreNormalizer::default().alpha(), 15.0);
}

#[test]
fn error_message_names_alpha() {
    let err = ScoreNormalizer::new(-1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid normalization alpha -1: must be a finite number greater than zero"
    );
}

// -----------------------------------------------------------------------
// normalize
// -----------------------------------------------------------------------

#[test]
fn zero_score_normalizes_to_zero() {
    assert_eq!(normalize(0.0, 15.0).unwrap(), 0.0);
    assert_eq!(normalize(0.0, 1e-300).unwrap(), 0.0);
}

#[test]
fn matches_reference_formula() {
    // 4 / sqrt(16 + 15)
    let expected = 4.0 / 31.0_f64.sqrt();
    assert_eq!(normalize(4.0, 15.0).unwrap(), expected);
}

#[test]
fn known_values_at_reference_alpha() {
    let n = ScoreNormalizer::default();
    assert!((n.normalize(1.0) - 0.25).abs() < 1e-12);
    assert!((n.normalize(-7.0) - (-7.0 / 64.0_f64.sqrt())).abs() < 1e-12);
}

#[test]
fn is_odd_symmetric() {
    let n = ScoreNormalizer::default();
    for s in [0.1, 1.0, 2.5, 15.0, 1e6] {
        assert_eq!(n.normalize(-s), -n.normalize(s));
    }
}

#[test]
fn large_scores_approach_one() {
    let n = ScoreNormalizer::default();
    let a = n.normalize(10.0);
    let b = n.normalize(100.0);
    let c = n.normalize(1e6);
    assert!(a < b && b < c, "expected monotonic approach: {a} {b} {c}");
    assert!(c <= 1.0);
    assert!(1.0 - c < 1e-10);
}

#[test]
fn overflowing_scores_saturate() {
    let n = ScoreNormalizer::default();
    assert_eq!(n.normalize(1e200), 1.0);
    assert_eq!(n.normalize(-1e200), -1.0);
    assert_eq!(n.normalize(f64::MAX), 1.0);
    assert_eq!(n.normalize(f64::INFINITY), 1.0);
    assert_eq!(n.normalize(f64::NEG_INFINITY), -1.0);
}

#[test]
fn nan_score_propagates() {
    assert!(ScoreNormalizer::default().normalize(f64::NAN).is_nan());
}

#[test]
fn smaller_alpha_is_steeper() {
    let steep = normalize(1.0, 1.0).unwrap();
    let flat = normalize(1.0, 100.0).unwrap();
    assert!(steep > flat);
}
