//! Model abstraction used by the HTTP layer.
//!
//! - [`Predictor`]: read-only scoring of a single [`FeatureVector`]
//! - [`BoosterModel`]: native booster converted from XGBoost JSON
//! - [`OutputTransform`]: margin to prediction mapping per objective
//! - [`load_model`] / [`load_predictor`]: startup loading

mod booster;
mod loader;
mod transform;

pub use booster::BoosterModel;
pub use loader::{load_model, load_predictor};
pub use transform::OutputTransform;

use crate::error::InferenceError;
use crate::features::FeatureVector;

/// Scores one feature vector.
///
/// Implementations are shared across request tasks and must not mutate
/// state while predicting.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;
}

impl<F> Predictor for F
where
    F: Fn(&FeatureVector) -> Result<f64, InferenceError> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        self(features)
    }
}
