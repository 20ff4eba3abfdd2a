//! HTTP surface: landing page and prediction endpoint.

mod form;
mod handlers;
mod response;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::DEFAULT_INDEX_HTML;
use crate::model::Predictor;

pub use response::{ErrorResponse, PredictionResponse};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the model failed to load at startup.
    pub predictor: Option<Arc<dyn Predictor>>,
    pub index_html: Arc<str>,
}

impl AppState {
    pub fn new(predictor: Option<Arc<dyn Predictor>>) -> Self {
        Self {
            predictor,
            index_html: Arc::from(DEFAULT_INDEX_HTML),
        }
    }

    pub fn with_index_html(mut self, html: impl Into<Arc<str>>) -> Self {
        self.index_html = html.into();
        self
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.is_some()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}
