//! Single-row inference for tree ensembles and linear boosters.
//!
//! - [`gbdt`]: tree traversal and forest scoring
//! - [`gblinear`]: linear model scoring
//!
//! Every entry point returns a raw margin; objective-specific output
//! transforms live in [`crate::model::OutputTransform`].
//!
//! ```ignore
//! use ppv_serve::inference::ForestPredictor;
//!
//! let predictor = ForestPredictor::new(&forest);
//! let margin = predictor.predict_row(&features);
//! ```

pub mod gbdt;
pub mod gblinear;

pub use gbdt::{traverse_to_leaf, ForestPredictor};
pub use gblinear::LinearModelPredict;
