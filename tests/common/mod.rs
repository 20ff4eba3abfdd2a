//! Shared helpers for integration tests.
//!
//! Fixtures live in `tests/test-cases/xgboost/{gbtree,gblinear,dart}` as
//! `{name}.model.json`, `{name}.input.json` and `{name}.expected.json`.
//!
//! The models are small hand-written XGBoost JSON dumps, not `save_model`
//! output from a training run. Their expected values are hand-derived by
//! walking each tree (or the linear weights) for every input row, then
//! applying the objective's transform.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use http_body_util::BodyExt;
use ppv_serve::{FeatureVector, InferenceError, Predictor, FEATURE_NAMES, N_FEATURES};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Absolute tolerance for comparing against fixture predictions.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

// =============================================================================
// Fixtures
// =============================================================================

pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases")
}

pub fn xgboost_test_cases_dir() -> PathBuf {
    test_cases_dir().join("xgboost")
}

/// Path of `{kind}/{name}.model.json`.
pub fn model_path(kind: &str, name: &str) -> PathBuf {
    xgboost_test_cases_dir()
        .join(kind)
        .join(format!("{name}.model.json"))
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let file =
        File::open(path).unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// Input rows; `None` is a missing value.
#[derive(Debug, Deserialize)]
pub struct TestInput {
    pub features: Vec<Vec<Option<f64>>>,
    pub num_rows: usize,
    pub num_features: usize,
}

impl TestInput {
    /// Rows as feature vectors, mapping `None` to NaN.
    pub fn to_feature_vectors(&self) -> Vec<FeatureVector> {
        self.features
            .iter()
            .map(|row| {
                assert_eq!(row.len(), N_FEATURES, "fixture row has wrong width");
                let mut values = [0.0; N_FEATURES];
                for (slot, x) in values.iter_mut().zip(row) {
                    *slot = x.unwrap_or(f64::NAN);
                }
                FeatureVector::new(values)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct TestExpected {
    /// Raw margins.
    pub predictions: Vec<f64>,
    /// Predictions after the objective transform.
    pub predictions_transformed: Vec<f64>,
    pub objective: String,
}

pub struct TestCase {
    pub model_path: PathBuf,
    pub input: TestInput,
    pub expected: TestExpected,
}

pub fn load_test_case(kind: &str, name: &str) -> TestCase {
    let dir = xgboost_test_cases_dir().join(kind);
    TestCase {
        model_path: model_path(kind, name),
        input: load_json(&dir.join(format!("{name}.input.json"))),
        expected: load_json(&dir.join(format!("{name}.expected.json"))),
    }
}

// =============================================================================
// Predictors
// =============================================================================

/// Predictor that always returns `value`.
pub fn constant_predictor(value: f64) -> Arc<dyn Predictor> {
    Arc::new(move |_: &FeatureVector| Ok::<_, InferenceError>(value))
}

/// Predictor that returns the feature at `index`, for checking input order.
pub fn echo_predictor(index: usize) -> Arc<dyn Predictor> {
    Arc::new(move |features: &FeatureVector| {
        Ok::<_, InferenceError>(features.values()[index])
    })
}

// =============================================================================
// HTTP
// =============================================================================

/// Form-encode `(label, value)` pairs.
pub fn encode_form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// All thirteen labels set to the same value.
pub fn uniform_form(value: &str) -> String {
    encode_form(FEATURE_NAMES.iter().map(|name| (*name, value)))
}

fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

pub fn predict_request(body: String) -> Request<Body> {
    Request::post("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Encode `(name, value)` pairs as a `multipart/form-data` body.
pub fn multipart_request<'a>(
    boundary: &str,
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in pairs {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::post("/predict")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body is UTF-8")
}
