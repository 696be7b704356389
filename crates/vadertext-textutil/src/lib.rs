//! Text and score normalization primitives for VADER-style sentiment scoring.
//!
//! Three pure building blocks that a lexicon-based scorer calls around its
//! own aggregation step:
//!
//! 1. [`collapse_punctuation`] before tokenization,
//! 2. [`has_partial_caps_emphasis`] once per tokenized sentence,
//! 3. [`normalize`] once per final compound score.
//!
//! The empirical weights the scorer applies alongside them live in
//! [`constants`].

pub mod caps;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod punctuation;

pub use caps::{has_partial_caps_emphasis, is_all_caps};
pub use constants::{
    EmpiricalConstants, BOOSTER_DECREASE, BOOSTER_INCREASE, CAPS_INCREASE, DEFAULT_ALPHA,
    N_SCALAR,
};
pub use error::TextUtilError;
pub use normalize::{normalize, ScoreNormalizer};
pub use punctuation::{collapse_punctuation, is_punctuation, whitespace_runs, PUNCTUATION};
