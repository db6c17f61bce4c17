// src/tests/router_tests/predict_tests.rs

use crate::domain::{OrderRecord, PredictionResult};
use crate::predictor::PredictorClient;
use crate::router::handle;
use crate::tests::utils::{
    post_form, post_json, read_response_body, spawn_predictor_stub, valid_form_body,
};

/// The record the valid form body should serialize into.
fn expected_record() -> OrderRecord {
    OrderRecord {
        created_date: "2025-03-02T16:13:47+03:00".to_string(),
        ..OrderRecord::default()
    }
}

#[test]
fn fraud_verdict_shows_confidence_percentage() {
    let (base_url, rx) =
        spawn_predictor_stub(200, r#"{"prediction":1,"confidence":0.92,"is_fraud":true}"#);
    let client = PredictorClient::with_base_url(base_url).unwrap();

    let resp = handle(post_form("/check", valid_form_body()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Fraud Detected!"));
    assert!(html.contains("Confidence: 92.00%"));

    // Exactly one POST to /predict, carrying the record verbatim.
    let captured = rx.recv().expect("predictor was never called");
    assert_eq!(captured.path, "/predict");

    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, serde_json::to_value(expected_record()).unwrap());

    assert!(rx.try_recv().is_err(), "expected a single upstream call");
}

#[test]
fn legitimate_verdict_is_rendered() {
    let (base_url, _rx) =
        spawn_predictor_stub(200, r#"{"prediction":0,"confidence":0.12,"is_fraud":false}"#);
    let client = PredictorClient::with_base_url(base_url).unwrap();

    let resp = handle(post_form("/check", valid_form_body()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Legitimate Order"));
    assert!(html.contains("Confidence: 12.00%"));
    assert!(!html.contains("Fraud Detected"));
}

#[test]
fn upstream_failure_shows_the_status_code() {
    let (base_url, _rx) = spawn_predictor_stub(500, r#"{"detail":"model exploded"}"#);
    let client = PredictorClient::with_base_url(base_url).unwrap();

    let resp = handle(post_form("/check", valid_form_body()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Error"));
    assert!(html.contains("500"));
}

#[test]
fn unreachable_predictor_shows_a_network_error() {
    // Nothing listens on port 1.
    let client = PredictorClient::with_base_url("http://127.0.0.1:1").unwrap();

    let resp = handle(post_form("/check", valid_form_body()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Error"));
    assert!(html.contains("Network error"));
}

#[test]
fn a_new_submission_replaces_the_previous_banner() {
    // First submission fails upstream, second succeeds; each response
    // is a complete fragment for the same swap target, so the success
    // carries no trace of the earlier error.
    let (bad_url, _rx1) = spawn_predictor_stub(500, r#"{"detail":"down"}"#);
    let bad = PredictorClient::with_base_url(bad_url).unwrap();
    let first = read_response_body(handle(post_form("/check", valid_form_body()), &bad).unwrap());
    assert!(first.contains("500"));

    let (good_url, _rx2) =
        spawn_predictor_stub(200, r#"{"prediction":0,"confidence":0.03,"is_fraud":false}"#);
    let good = PredictorClient::with_base_url(good_url).unwrap();
    let second = read_response_body(handle(post_form("/check", valid_form_body()), &good).unwrap());

    assert!(second.contains("Legitimate Order"));
    assert!(!second.contains("Error"));
    assert!(!second.contains("500"));
}

#[test]
fn batch_endpoint_proxies_a_json_array() {
    let (base_url, rx) = spawn_predictor_stub(
        200,
        r#"[{"prediction":1,"confidence":0.9,"is_fraud":true},{"prediction":0,"confidence":0.2,"is_fraud":false}]"#,
    );
    let client = PredictorClient::with_base_url(base_url).unwrap();

    let orders = vec![expected_record(), expected_record()];
    let body = serde_json::to_string(&orders).unwrap();

    let resp = handle(post_json("/api/predict-batch", body), &client).unwrap();
    assert_eq!(resp.status(), 200);

    let results: Vec<PredictionResult> =
        serde_json::from_str(&read_response_body(resp)).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_fraud);
    assert!(!results[1].is_fraud);

    let captured = rx.recv().unwrap();
    assert_eq!(captured.path, "/predict_batch");
}

#[test]
fn malformed_batch_body_is_a_bad_request() {
    let client = PredictorClient::with_base_url("http://127.0.0.1:1").unwrap();

    let err = handle(post_json("/api/predict-batch", "not json".to_string()), &client).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}
