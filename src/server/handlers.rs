use axum::extract::{Request, State};
use axum::response::Html;
use axum::Json;
use tracing::{debug, error, info};

use crate::error::PredictError;
use crate::features::BlastForm;

use super::form::read_form_pairs;
use super::{AppState, PredictionResponse};

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}

/// Score one form submission.
///
/// The model check comes first: without a model the form is never parsed.
pub(super) async fn predict(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<PredictionResponse>, PredictError> {
    let Some(predictor) = state.predictor.as_deref() else {
        error!("prediction requested but no model is loaded");
        return Err(PredictError::ModelUnavailable);
    };

    let pairs = read_form_pairs(request).await?;
    debug!(form = ?pairs, "received form");

    let features = BlastForm::from_pairs(pairs).to_feature_vector()?;
    debug!(features = ?features.values(), "coerced features");

    let predicted_ppv = predictor.predict(&features)?;
    info!(predicted_ppv, "prediction served");

    Ok(Json(PredictionResponse { predicted_ppv }))
}
