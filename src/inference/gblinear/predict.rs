//! Linear model prediction extensions.
//!
//! Provides prediction methods for [`LinearModel`](crate::repr::gblinear::LinearModel).

use ndarray::{s, ArrayView1, Zip};

use crate::repr::gblinear::LinearModel;

/// Extension trait for LinearModel prediction.
pub trait LinearModelPredict {
    /// Raw margin for one row: `bias + Σ weight × feature`.
    ///
    /// Only the first `n_features` values are used. Missing values (NaN or
    /// absent trailing features) contribute nothing, matching XGBoost's
    /// sparse handling in the linear booster.
    fn predict_row(&self, features: &[f32]) -> f32;
}

impl LinearModelPredict for LinearModel {
    fn predict_row(&self, features: &[f32]) -> f32 {
        let n = self.n_features().min(features.len());
        let row = ArrayView1::from(&features[..n]);
        let coefficients = self.coefficients();

        Zip::from(coefficients.slice(s![..n]))
            .and(row)
            .fold(self.bias(), |acc, &w, &x| if x.is_nan() { acc } else { acc + w * x })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn predict_row_is_bias_plus_dot() {
        // y = 0.5*x0 + 0.3*x1 + 0.1
        let model = LinearModel::from_parts(vec![0.5, 0.3], 0.1);

        assert_abs_diff_eq!(model.predict_row(&[1.0, 2.0]), 1.2, epsilon = 1e-6);
        assert_abs_diff_eq!(model.predict_row(&[0.0, 0.0]), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn nan_features_contribute_nothing() {
        let model = LinearModel::from_parts(vec![2.0, 3.0], 1.0);
        assert_abs_diff_eq!(model.predict_row(&[f32::NAN, 1.0]), 4.0);
    }

    #[test]
    fn extra_features_are_ignored_and_short_rows_zero_filled() {
        let model = LinearModel::from_parts(vec![2.0, 3.0], 1.0);

        assert_abs_diff_eq!(model.predict_row(&[1.0, 1.0, 100.0]), 6.0);
        assert_abs_diff_eq!(model.predict_row(&[1.0]), 3.0);
    }
}
