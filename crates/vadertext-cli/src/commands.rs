//! Command handlers. Each returns an [`Output`] so rendering stays in one place.

use anyhow::Context;
use serde::Serialize;
use vadertext_core::AppConfig;
use vadertext_textutil::{
    collapse_punctuation, has_partial_caps_emphasis, is_all_caps, whitespace_runs,
    EmpiricalConstants, ScoreNormalizer,
};

use crate::Commands;

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub(crate) enum Output {
    Collapse {
        input: String,
        output: String,
    },
    Caps {
        tokens: Vec<String>,
        all_caps_tokens: usize,
        partial_emphasis: bool,
    },
    Normalize {
        score: f64,
        alpha: f64,
        normalized: f64,
    },
    Constants(EmpiricalConstants),
}

impl Output {
    /// Renders as pretty JSON when `json` is set, plain text otherwise.
    pub(crate) fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            return serde_json::to_string_pretty(self).context("failed to serialize output");
        }
        Ok(match self {
            Output::Collapse { output, .. } => output.clone(),
            Output::Caps {
                tokens,
                all_caps_tokens,
                partial_emphasis,
            } => format!(
                "partial caps emphasis: {partial_emphasis} ({all_caps_tokens} of {} tokens all caps)",
                tokens.len()
            ),
            Output::Normalize { normalized, .. } => normalized.to_string(),
            Output::Constants(c) => format!(
                "booster_increase = {}\nbooster_decrease = {}\ncaps_increase = {}\nn_scalar = {}\ndefault_alpha = {}",
                c.booster_increase, c.booster_decrease, c.caps_increase, c.n_scalar, c.default_alpha
            ),
        })
    }
}

/// Runs `command` against the loaded configuration.
///
/// # Errors
///
/// Returns an error if a normalization alpha is not a finite positive number.
/// The configured alpha is only consulted, and only reported as invalid,
/// when `normalize` runs without `--alpha`.
pub(crate) fn execute(command: Commands, config: &AppConfig) -> anyhow::Result<Output> {
    match command {
        Commands::Collapse { text } => {
            let output = collapse_punctuation(&text);
            tracing::debug!(
                removed = text.chars().count() - output.chars().count(),
                "collapsed punctuation"
            );
            Ok(Output::Collapse {
                input: text,
                output,
            })
        }
        Commands::Caps { text } => {
            let tokens: Vec<String> = whitespace_runs(&text).map(str::to_string).collect();
            let all_caps_tokens = tokens.iter().filter(|t| is_all_caps(t)).count();
            Ok(Output::Caps {
                partial_emphasis: has_partial_caps_emphasis(&tokens),
                all_caps_tokens,
                tokens,
            })
        }
        Commands::Normalize { score, alpha } => {
            let alpha = match alpha {
                Some(alpha) => alpha,
                None => config.alpha()?,
            };
            let normalizer = ScoreNormalizer::new(alpha)
                .with_context(|| format!("cannot normalize score {score}"))?;
            Ok(Output::Normalize {
                score,
                alpha,
                normalized: normalizer.normalize(score),
            })
        }
        Commands::Constants => Ok(Output::Constants(EmpiricalConstants::REFERENCE)),
    }
}
