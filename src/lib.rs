//! ppv-serve: peak particle velocity prediction over HTTP.
//!
//! Blast-design parameters arrive as a form submission, are coerced into a
//! fixed-order feature vector and scored by a gradient boosted model loaded
//! once at startup.
//!
//! # Key Types
//!
//! - [`BlastForm`] / [`FeatureVector`] - Form fields and the coerced model input
//! - [`Predictor`] - Read-only scoring interface shared by all requests
//! - [`BoosterModel`] - Native model converted from an XGBoost JSON artifact
//! - [`AppState`] - Router state carrying the (possibly absent) predictor
//!
//! # Loading Models
//!
//! Use [`model::load_model`] for a typed result, or [`model::load_predictor`]
//! at startup, which logs the outcome and yields `None` on failure.

pub mod compat;
pub mod config;
pub mod error;
pub mod features;
pub mod inference;
pub mod model;
pub mod repr;
pub mod server;

pub use config::ServerConfig;
pub use error::{CoercionError, InferenceError, LoadError, PredictError};
pub use features::{BlastForm, Feature, FeatureVector, FEATURE_NAMES, N_FEATURES};
pub use model::{load_model, load_predictor, BoosterModel, OutputTransform, Predictor};
pub use server::{router, AppState};
