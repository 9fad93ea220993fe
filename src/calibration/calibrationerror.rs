use thiserror::Error;

/// Failure to obtain a usable calibration dataset. Fatal at startup; the
/// calculator never runs without a successfully loaded dataset.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("cannot read calibration dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("malformed calibration dataset: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
