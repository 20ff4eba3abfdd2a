//! External model format compatibility.
//!
//! Models are trained outside this service and exported as XGBoost JSON
//! (`booster.save_model("model.json")`). The loader here parses that format
//! and converts it to the native types in [`crate::repr`].

pub mod xgboost;

pub use xgboost::{Booster, ConversionError, XgbModel};
