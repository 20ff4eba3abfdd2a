//! HTTP behaviour of the router, driven in-process.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use ppv_serve::{router, AppState, FeatureVector, InferenceError, FEATURE_NAMES};
use rstest::rstest;
use tower::ServiceExt;

use common::{
    body_json, body_text, constant_predictor, echo_predictor, encode_form, multipart_request,
    predict_request, uniform_form,
};

const MODEL_UNAVAILABLE: &str = "Model not loaded properly. Check server logs for details.";

fn app_with(predictor: Arc<dyn ppv_serve::Predictor>) -> axum::Router {
    router(AppState::new(Some(predictor)))
}

fn app_without_model() -> axum::Router {
    router(AppState::new(None))
}

#[tokio::test]
async fn numeric_form_returns_prediction() {
    let response = app_with(constant_predictor(42.0))
        .oneshot(predict_request(uniform_form("12.5")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "predicted_ppv": 42.0 }));
}

#[rstest]
#[case("nil")]
#[case("Nil")]
#[case("NIL")]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn nil_and_blank_fields_are_zero(#[case] value: &str) {
    let sum = Arc::new(|features: &FeatureVector| {
        Ok::<_, InferenceError>(features.values().iter().map(|v| v.abs()).sum::<f64>())
    });
    let response = app_with(sum)
        .oneshot(predict_request(uniform_form(value)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["predicted_ppv"], 0.0);
}

#[tokio::test]
async fn missing_fields_are_zero() {
    let response = app_with(echo_predictor(12))
        .oneshot(predict_request(encode_form([("Depth (m)", "9")])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["predicted_ppv"], 0.0);
}

#[rstest]
#[case(0, "12.5", 12.5)]
#[case(1, "-3", -3.0)]
#[case(9, "0.66", 0.66)]
#[case(11, "1e3", 1000.0)]
#[case(12, " 450 ", 450.0)]
#[tokio::test]
async fn each_field_reaches_its_position(
    #[case] index: usize,
    #[case] raw: &str,
    #[case] expected: f64,
) {
    let mut pairs: Vec<(&str, &str)> = FEATURE_NAMES.iter().map(|name| (*name, "nil")).collect();
    pairs[index].1 = raw;
    // Reverse so key order in the body differs from model order.
    pairs.reverse();

    let response = app_with(echo_predictor(index))
        .oneshot(predict_request(encode_form(pairs)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["predicted_ppv"], expected);
}

#[tokio::test]
async fn non_numeric_value_is_500_with_message() {
    let mut pairs: Vec<(&str, &str)> = FEATURE_NAMES.iter().map(|name| (*name, "1")).collect();
    pairs[1].1 = "abc";

    let response = app_with(constant_predictor(42.0))
        .oneshot(predict_request(encode_form(pairs)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        r#"invalid value for 'Depth (m)': "abc" is not a number"#
    );
    assert!(body.get("predicted_ppv").is_none());
}

#[tokio::test]
async fn predictor_is_not_called_on_bad_input() {
    let called = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let predictor = Arc::new(move |_: &FeatureVector| {
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
        Ok::<_, InferenceError>(1.0)
    });

    let response = app_with(predictor)
        .oneshot(predict_request(encode_form([("Volume(m3)", "lots")])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
}

#[rstest]
#[case(uniform_form("12.5"))]
#[case(uniform_form("abc"))]
#[case(String::new())]
#[tokio::test]
async fn missing_model_is_500_with_fixed_message(#[case] body: String) {
    let response = app_without_model()
        .oneshot(predict_request(body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": MODEL_UNAVAILABLE })
    );
}

#[tokio::test]
async fn inference_failure_is_500() {
    let failing = Arc::new(|_: &FeatureVector| {
        Err::<f64, _>(InferenceError::NonFiniteOutput(f64::INFINITY))
    });
    let response = app_with(failing)
        .oneshot(predict_request(uniform_form("1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "model produced a non-finite prediction (inf)"
    );
}

#[tokio::test]
async fn multipart_form_is_accepted() {
    let request = multipart_request(
        "XYZ",
        [("Depth (m)", "9"), ("Hole (Nos)", "nil"), ("Depth (m)", "4")],
    );

    let response = app_with(echo_predictor(1)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "predicted_ppv": 9.0 }));
}

#[rstest]
#[case(None, "")]
#[case(None, "Depth (m)=9")]
#[case(Some("application/json"), r#"{"Depth (m)": 9}"#)]
#[case(Some("text/plain"), "Depth (m)=9")]
#[tokio::test]
async fn body_without_form_content_type_is_all_zeros(
    #[case] content_type: Option<&str>,
    #[case] body: &'static str,
) {
    let mut builder = Request::post("/predict");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let sum = |features: &FeatureVector| Ok::<_, InferenceError>(features.values().iter().map(|v| v.abs()).sum::<f64>());
    let response = app_with(Arc::new(sum)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "predicted_ppv": 0.0 }));
}

#[tokio::test]
async fn multipart_without_boundary_is_500() {
    let request = Request::post("/predict")
        .header(header::CONTENT_TYPE, "multipart/form-data")
        .body(Body::from("Depth (m)=9"))
        .unwrap();

    let response = app_with(constant_predictor(1.0))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("malformed form body"));
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn index_is_html_regardless_of_model(#[case] loaded: bool) {
    let state = AppState::new(loaded.then(|| constant_predictor(1.0)));
    assert_eq!(state.model_loaded(), loaded);

    let response = router(state)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains("/predict"));
    for name in FEATURE_NAMES {
        assert!(html.contains(&format!(r#"name="{name}""#)), "landing page lacks {name}");
    }
}

#[tokio::test]
async fn index_html_override_is_served() {
    let state = AppState::new(None).with_index_html("<html>custom</html>");
    let response = router(state)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_text(response).await, "<html>custom</html>");
}

#[tokio::test]
async fn predict_rejects_get() {
    let response = app_with(constant_predictor(1.0))
        .oneshot(Request::get("/predict").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
