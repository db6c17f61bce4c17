use crate::domain::{OrderForm, OrderRecord};
use crate::errors::{ResultResp, ServerError};
use crate::predictor::PredictorClient;
use crate::responses::{html_response, json_response};
use crate::templates;
use astra::{Body, Request};
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, predictor: &PredictorClient) -> ResultResp {
    let (parts, body) = req.into_parts();

    match (parts.method.as_str(), parts.uri.path()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        // Form submission; responds with an htmx fragment.
        ("POST", "/check") => check_order(body, predictor),

        // JSON passthrough for scoring many orders at once.
        ("POST", "/api/predict-batch") => predict_batch(body, predictor),

        _ => Err(ServerError::NotFound),
    }
}

fn check_order(body: Body, predictor: &PredictorClient) -> ResultResp {
    let raw = read_body(body)?;
    let form = OrderForm::from_params(parse_form(&raw));

    // Invalid input never reaches the network.
    let order = match form.validate() {
        Ok(order) => order,
        Err(errors) => return html_response(templates::components::validation_errors(&errors)),
    };

    match predictor.predict(&order) {
        Ok(result) => html_response(templates::components::verdict_alert(&result)),
        Err(e) => {
            eprintln!("⚠️ Prediction request failed: {e}");
            html_response(templates::components::error_banner(&e.to_string()))
        }
    }
}

fn predict_batch(body: Body, predictor: &PredictorClient) -> ResultResp {
    let raw = read_body(body)?;

    let orders: Vec<OrderRecord> = serde_json::from_str(&raw)
        .map_err(|e| ServerError::BadRequest(format!("Invalid order list: {e}")))?;

    let results = predictor
        .predict_batch(&orders)
        .map_err(|e| ServerError::Upstream(e.to_string()))?;

    let json = serde_json::to_string(&results).map_err(|_| ServerError::InternalError)?;
    json_response(json)
}

fn read_body(mut body: Body) -> Result<String, ServerError> {
    let mut raw = String::new();
    body.reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;
    Ok(raw)
}

fn parse_form(raw: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
