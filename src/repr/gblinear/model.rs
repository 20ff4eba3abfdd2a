//! Linear model data structure.

use ndarray::{s, Array1, ArrayView1};

/// Single-output linear booster (coefficients + bias).
///
/// Stored as one `Array1<f32>` of length `n_features + 1`; the last entry is
/// the bias, with the model's base score already folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Array1<f32>,
}

impl LinearModel {
    /// Create a linear model from a combined weight vector.
    ///
    /// # Panics
    ///
    /// Panics if `weights` is empty (the bias entry is required).
    pub fn new(weights: Array1<f32>) -> Self {
        assert!(!weights.is_empty(), "weights must contain at least the bias");
        Self { weights }
    }

    /// Create a linear model from coefficients and a bias.
    pub fn from_parts(coefficients: Vec<f32>, bias: f32) -> Self {
        let mut weights = coefficients;
        weights.push(bias);
        Self {
            weights: Array1::from(weights),
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len() - 1
    }

    #[inline]
    pub fn weight(&self, feature: usize) -> f32 {
        self.weights[feature]
    }

    #[inline]
    pub fn bias(&self) -> f32 {
        self.weights[self.n_features()]
    }

    /// Coefficients without the bias.
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f32> {
        self.weights.slice(s![..self.n_features()])
    }

    /// Add `delta` to the bias.
    pub fn shift_bias(&mut self, delta: f32) {
        let n = self.n_features();
        self.weights[n] += delta;
    }
}
