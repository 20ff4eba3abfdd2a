//! Gradient-boosted linear (GBLinear) representation.
//!
//! # Weight Layout
//!
//! ```text
//! weights[feature] → coefficient
//! weights[n_features] → bias
//! ```
//!
//! # Example
//!
//! ```
//! use ppv_serve::repr::gblinear::LinearModel;
//!
//! // y = 0.5*x0 + 0.3*x1 + 0.1
//! let model = LinearModel::from_parts(vec![0.5, 0.3], 0.1);
//!
//! assert_eq!(model.weight(0), 0.5);
//! assert_eq!(model.weight(1), 0.3);
//! assert_eq!(model.bias(), 0.1);
//! ```

mod model;

pub use model::LinearModel;
