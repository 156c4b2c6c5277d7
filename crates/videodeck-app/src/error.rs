//! Application shell errors.

use thiserror::Error;
use videodeck_core::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No document available")]
    NoDocument,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JavaScript error: {0}")]
    Js(String),
}
