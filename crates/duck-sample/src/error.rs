//! Error types for the pond application.

use duck_framework::CaseError;
use thiserror::Error;

/// Errors that can occur while assembling or driving the pond.
#[derive(Debug, Error)]
pub enum PondError {
    /// A duck was defined with a broken case mapping.
    #[error("Invalid duck definition: {0}")]
    InvalidDuck(#[from] CaseError),

    /// A scripted action could not be parsed.
    #[error("Invalid action script: {0}")]
    InvalidScript(#[from] serde_json::Error),
}
