use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Data bundle not found at {0}. Run the preprocessing job first.")]
    NotFound(PathBuf),

    #[error("Failed to read data bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode JSON data bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode binary data bundle: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Unsupported data bundle format: {0:?} (expected .json, .bin or .bincode)")]
    UnsupportedFormat(PathBuf),

    #[error("Data bundle is malformed: {0}")]
    Invalid(#[from] core_types::CoreError),
}
