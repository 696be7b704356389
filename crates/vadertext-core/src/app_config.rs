use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: Environment,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Calibration alpha for score normalization, or why `VADERTEXT_ALPHA`
    /// was rejected. Only commands that fall back to it should fail on it.
    pub alpha: Result<f64, ConfigError>,
}

impl AppConfig {
    /// The configured normalization alpha. Finite and positive when `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `VADERTEXT_ALPHA` was set to
    /// something other than a finite positive number.
    pub fn alpha(&self) -> Result<f64, ConfigError> {
        self.alpha.clone()
    }
}
