//! Error types.
//!
//! Loading, coercion and inference keep distinct error types; the HTTP layer
//! folds all of them into [`PredictError`] and a single response shape.

use std::path::PathBuf;

use crate::compat::xgboost::ConversionError;

/// Message returned to callers while no model is loaded.
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "Model not loaded properly. Check server logs for details.";

/// Failure to turn a model artifact into a predictor.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to convert model: {0}")]
    Conversion(#[from] ConversionError),
    #[error("model expects {actual} features, but {expected} are required")]
    FeatureCount { expected: usize, actual: usize },
    #[error("feature {index} is named {actual:?} in the model, expected {expected:?}")]
    FeatureName {
        index: usize,
        expected: &'static str,
        actual: String,
    },
    #[error("unsupported objective '{0}'")]
    UnsupportedObjective(String),
}

/// A form value that could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("invalid value for '{field}': {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("malformed form body: {0}")]
    MalformedForm(String),
}

/// Failure raised by a predictor while scoring a row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },
    #[error("model produced a non-finite prediction ({0})")]
    NonFiniteOutput(f64),
}

/// Everything that can go wrong while serving `/predict`.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("{}", MODEL_UNAVAILABLE_MESSAGE)]
    ModelUnavailable,
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
