// src/tests/router_tests/form_tests.rs

use crate::errors::ServerError;
use crate::predictor::PredictorClient;
use crate::router::handle;
use crate::tests::utils::{get, post_form, read_response_body, spawn_predictor_stub};

#[test]
fn home_page_renders_the_order_form() {
    let client = PredictorClient::with_base_url("http://127.0.0.1:1").unwrap();

    let resp = handle(get("/"), &client).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_response_body(resp);
    assert!(body.contains("Fraud Detection System"));
    assert!(body.contains(r#"name="user_id""#));
    assert!(body.contains(r#"name="mean_percent_of_ordered_items""#));
    assert!(body.contains("Check for Fraud"));
    assert!(body.contains(r#"hx-post="/check""#));
}

#[test]
fn unknown_route_is_not_found() {
    let client = PredictorClient::with_base_url("http://127.0.0.1:1").unwrap();

    let err = handle(get("/nope"), &client).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn invalid_form_shows_field_messages_and_skips_the_api() {
    let (base_url, rx) = spawn_predictor_stub(200, r#"{"prediction":0,"confidence":0.1,"is_fraud":false}"#);
    let client = PredictorClient::with_base_url(base_url).unwrap();

    // user_id below minimum plus an unparsable distance.
    let body = "user_id=0&nm_id=1&created_date=2025-03-02&service=nnsz\
                &total_ordered=1&payment_type=CSH&count_items=0&unique_items=0\
                &avg_unique_purchase=0&is_courier=0&nm_age=0&distance=abc\
                &days_after_registration=0&number_of_orders=0&number_of_ordered_items=0\
                &mean_number_of_ordered_items=0&min_number_of_ordered_items=0\
                &max_number_of_ordered_items=0&mean_percent_of_ordered_items=0";

    let resp = handle(post_form("/check", body.to_string()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Please fix the following fields"));
    assert!(html.contains("user_id"));
    assert!(html.contains("distance"));
    assert!(!html.contains("Fraud Detected"));

    // The predictor never saw a request.
    assert!(rx.try_recv().is_err());
}

#[test]
fn missing_fields_fail_validation() {
    let client = PredictorClient::with_base_url("http://127.0.0.1:1").unwrap();

    let resp = handle(post_form("/check", "user_id=5".to_string()), &client).unwrap();
    let html = read_response_body(resp);

    assert!(html.contains("Please fix the following fields"));
    assert!(html.contains("created_date"));
    assert!(html.contains("payment_type"));
}
