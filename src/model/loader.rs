//! Startup loading of the model artifact.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::compat::xgboost::XgbModel;
use crate::error::LoadError;

use super::{BoosterModel, Predictor};

/// Read, parse and convert an XGBoost JSON artifact.
pub fn load_model(path: impl AsRef<Path>) -> Result<BoosterModel, LoadError> {
    let model = XgbModel::from_file(path)?;
    BoosterModel::from_xgboost(&model)
}

/// Load the artifact for serving.
///
/// Failures are logged and yield `None`; the server keeps running and
/// answers predictions with a "model not loaded" error.
pub fn load_predictor(path: impl AsRef<Path>) -> Option<Arc<dyn Predictor>> {
    let path = path.as_ref();
    match load_model(path) {
        Ok(model) => {
            info!(
                path = %path.display(),
                booster = model.booster().kind(),
                trees = model.booster().n_trees(),
                features = model.n_features(),
                objective = model.objective(),
                "model loaded"
            );
            Some(Arc::new(model))
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to load model");
            None
        }
    }
}
