use thiserror::Error;

use crate::estimator::{EstimatorError, FetchError};

/// Unified application error for the binary boundary.
///
/// All layers (config, transport, pipeline, rendering) fail through this
/// type so `main` can report once and exit non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] FetchError),

    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
