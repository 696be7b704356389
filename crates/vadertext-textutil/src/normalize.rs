//! Compression of unbounded intensity scores into `[-1.0, 1.0]`.

use crate::constants::DEFAULT_ALPHA;
use crate::error::TextUtilError;

/// Normalizer bound to a validated alpha.
///
/// Maps a raw score `s` to `s / sqrt(s² + alpha)`, clamped to `[-1.0, 1.0]`.
/// The mapping is odd, monotonic in `s`, returns `0.0` for `0.0`, and
/// approaches `±1.0` as `|s|` grows. Larger alphas flatten the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNormalizer {
    alpha: f64,
}

impl ScoreNormalizer {
    /// Creates a normalizer for the given calibration alpha.
    ///
    /// # Errors
    ///
    /// Returns [`TextUtilError::InvalidAlpha`] if `alpha` is NaN, infinite,
    /// zero, or negative.
    pub fn new(alpha: f64) -> Result<Self, TextUtilError> {
        if alpha.is_finite() && alpha > 0.0 {
            Ok(Self { alpha })
        } else {
            Err(TextUtilError::InvalidAlpha { alpha })
        }
    }

    /// The validated alpha this normalizer was built with.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Normalizes `score` into `[-1.0, 1.0]`.
    ///
    /// Scores whose square overflows `f64`, including infinities, saturate to
    /// `±1.0`. A NaN score yields NaN.
    #[must_use]
    pub fn normalize(&self, score: f64) -> f64 {
        let denom = (score * score + self.alpha).sqrt();
        if denom.is_infinite() {
            tracing::trace!(score, alpha = self.alpha, "normalization saturated");
            return score.signum();
        }
        (score / denom).clamp(-1.0, 1.0)
    }
}

impl Default for ScoreNormalizer {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Normalizes `score` into `[-1.0, 1.0]` using `alpha`.
///
/// Convenience wrapper for a one-off [`ScoreNormalizer`]. Callers
/// normalizing many scores with the same alpha should build the normalizer
/// once.
///
/// # Errors
///
/// Returns [`TextUtilError::InvalidAlpha`] if `alpha` is not a finite number
/// greater than zero.
pub fn normalize(score: f64, alpha: f64) -> Result<f64, TextUtilError> {
    Ok(ScoreNormalizer::new(alpha)?.normalize(score))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
