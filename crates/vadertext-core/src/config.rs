use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Reference normalization alpha, used when `VADERTEXT_ALPHA` is unset.
const DEFAULT_ALPHA: &str = "15";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// An invalid `VADERTEXT_ALPHA` does not fail loading; it surfaces from
/// [`AppConfig::alpha`] when a caller needs the configured alpha.
#[must_use]
pub fn load_app_config() -> AppConfig {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
#[must_use]
pub fn load_app_config_from_env() -> AppConfig {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("VADERTEXT_ENV", "development"));
    let log_level = or_default("VADERTEXT_LOG_LEVEL", "info");
    let alpha = parse_alpha(&or_default("VADERTEXT_ALPHA", DEFAULT_ALPHA)).map_err(|reason| {
        ConfigError::InvalidEnvVar {
            var: "VADERTEXT_ALPHA".to_string(),
            reason,
        }
    });

    AppConfig {
        env,
        log_level,
        alpha,
    }
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_alpha(raw: &str) -> Result<f64, String> {
    let alpha = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(format!("alpha must be a finite number greater than zero, got {raw}"));
    }
    Ok(alpha)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
