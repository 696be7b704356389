//! Empirically derived weights of the VADER sentiment model.
//!
//! Hutto, C.J. & Gilbert, E.E. (2014). VADER: A Parsimonious Rule-based Model
//! for Sentiment Analysis of Social Media Text. ICWSM-14.
//!
//! These values are calibrated against human ratings and are consumed by the
//! aggregation step, not by the primitives in this crate.

use serde::Serialize;

/// Mean intensity increase contributed by a booster word ("very", "extremely").
pub const BOOSTER_INCREASE: f64 = 0.293;

/// Mean intensity decrease contributed by a dampener word ("barely", "slightly").
pub const BOOSTER_DECREASE: f64 = -0.293;

/// Mean intensity increase for an ALL-CAPS word in a sentence that also
/// contains non-caps words. Apply only when
/// [`has_partial_caps_emphasis`](crate::has_partial_caps_emphasis) is `true`.
pub const CAPS_INCREASE: f64 = 0.733;

/// Scalar applied to a lexicon valence when a negation word precedes it.
pub const N_SCALAR: f64 = -0.74;

/// Normalization alpha used by the reference model. Approximates the largest
/// raw compound score expected from a single text.
pub const DEFAULT_ALPHA: f64 = 15.0;

/// Snapshot of the empirical weights, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmpiricalConstants {
    /// See [`BOOSTER_INCREASE`].
    pub booster_increase: f64,
    /// See [`BOOSTER_DECREASE`].
    pub booster_decrease: f64,
    /// See [`CAPS_INCREASE`].
    pub caps_increase: f64,
    /// See [`N_SCALAR`].
    pub n_scalar: f64,
    /// See [`DEFAULT_ALPHA`].
    pub default_alpha: f64,
}

impl EmpiricalConstants {
    /// The calibrated reference values.
    pub const REFERENCE: Self = Self {
        booster_increase: BOOSTER_INCREASE,
        booster_decrease: BOOSTER_DECREASE,
        caps_increase: CAPS_INCREASE,
        n_scalar: N_SCALAR,
        default_alpha: DEFAULT_ALPHA,
    };
}

impl Default for EmpiricalConstants {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booster_weights_are_symmetric() {
        assert_eq!(BOOSTER_INCREASE, -BOOSTER_DECREASE);
    }

    #[test]
    fn reference_table_matches_constants() {
        let c = EmpiricalConstants::default();
        assert_eq!(c.booster_increase, 0.293);
        assert_eq!(c.booster_decrease, -0.293);
        assert_eq!(c.caps_increase, 0.733);
        assert_eq!(c.n_scalar, -0.74);
        assert_eq!(c.default_alpha, 15.0);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(EmpiricalConstants::REFERENCE).unwrap();
        assert_eq!(json["caps_increase"], 0.733);
        assert_eq!(json["n_scalar"], -0.74);
    }
}
