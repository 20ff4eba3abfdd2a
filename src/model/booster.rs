//! Native booster behind the [`Predictor`] interface.

use crate::compat::xgboost::{Booster, XgbModel};
use crate::error::{InferenceError, LoadError};
use crate::features::{FeatureVector, FEATURE_NAMES, N_FEATURES};
use crate::inference::{ForestPredictor, LinearModelPredict};

use super::{OutputTransform, Predictor};

/// A converted booster plus the transform of its objective.
#[derive(Debug, Clone)]
pub struct BoosterModel {
    booster: Booster,
    transform: OutputTransform,
    objective: String,
    n_features: usize,
}

impl BoosterModel {
    pub fn new(
        booster: Booster,
        transform: OutputTransform,
        objective: impl Into<String>,
        n_features: usize,
    ) -> Self {
        Self {
            booster,
            transform,
            objective: objective.into(),
            n_features,
        }
    }

    /// Convert a parsed XGBoost model, checking that it was trained on the
    /// blast-design features.
    pub fn from_xgboost(model: &XgbModel) -> Result<Self, LoadError> {
        let objective = model.objective();
        let transform = OutputTransform::for_objective(objective)
            .ok_or_else(|| LoadError::UnsupportedObjective(objective.to_string()))?;

        if model.n_features() != N_FEATURES {
            return Err(LoadError::FeatureCount {
                expected: N_FEATURES,
                actual: model.n_features(),
            });
        }

        let names = model.feature_names();
        if !names.is_empty() {
            if names.len() != N_FEATURES {
                return Err(LoadError::FeatureCount {
                    expected: N_FEATURES,
                    actual: names.len(),
                });
            }
            if let Some((index, (actual, expected))) = names
                .iter()
                .zip(FEATURE_NAMES)
                .enumerate()
                .find(|(_, (actual, expected))| actual.as_str() != *expected)
            {
                return Err(LoadError::FeatureName {
                    index,
                    expected,
                    actual: actual.clone(),
                });
            }
        }

        let booster = model.to_booster()?;
        Ok(Self::new(booster, transform, objective, N_FEATURES))
    }

    pub fn booster(&self) -> &Booster {
        &self.booster
    }

    pub fn transform(&self) -> OutputTransform {
        self.transform
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Raw margin for one row, before the output transform.
    pub fn predict_margin(&self, row: &[f32]) -> f32 {
        match &self.booster {
            Booster::Tree(forest) | Booster::Dart(forest) => {
                ForestPredictor::new(forest).predict_row(row)
            }
            Booster::Linear(linear) => linear.predict_row(row),
        }
    }
}

impl Predictor for BoosterModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let row = features.as_f32_row();
        if row.len() != self.n_features {
            return Err(InferenceError::FeatureCountMismatch {
                expected: self.n_features,
                actual: row.len(),
            });
        }

        let prediction = self.transform.apply(self.predict_margin(&row) as f64);
        if !prediction.is_finite() {
            return Err(InferenceError::NonFiniteOutput(prediction));
        }
        Ok(prediction)
    }
}
