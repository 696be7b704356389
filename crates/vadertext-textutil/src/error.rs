use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TextUtilError {
    #[error("invalid normalization alpha {alpha}: must be a finite number greater than zero")]
    InvalidAlpha { alpha: f64 },
}
