// client.rs
use crate::domain::{OrderRecord, PredictionResult};
use crate::predictor::PredictorError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Default base URL of the fraud-scoring service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Blocking client for the external prediction endpoint. One instance
/// is shared across all server workers; reqwest pools connections
/// internally, so clones are cheap handles.
#[derive(Clone)]
pub struct PredictorClient {
    client: Client,
    base_url: String,
}

impl PredictorClient {
    /// Build a client against `PREDICT_API_URL`, falling back to the
    /// local default when the variable is unset.
    pub fn new() -> Result<Self, PredictorError> {
        let base_url =
            std::env::var("PREDICT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, PredictorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| PredictorError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Score a single order. Exactly one POST per call; no retries.
    pub fn predict(&self, order: &OrderRecord) -> Result<PredictionResult, PredictorError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .header("Content-Type", "application/json")
            .json(order)
            .send()
            .map_err(|e| PredictorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(PredictorError::Status(status.as_u16(), text));
        }

        response
            .json::<PredictionResult>()
            .map_err(|e| PredictorError::Decode(e.to_string()))
    }

    /// Score a batch of orders in one request.
    pub fn predict_batch(
        &self,
        orders: &[OrderRecord],
    ) -> Result<Vec<PredictionResult>, PredictorError> {
        let response = self
            .client
            .post(format!("{}/predict_batch", self.base_url))
            .header("Content-Type", "application/json")
            .json(orders)
            .send()
            .map_err(|e| PredictorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(PredictorError::Status(status.as_u16(), text));
        }

        response
            .json::<Vec<PredictionResult>>()
            .map_err(|e| PredictorError::Decode(e.to_string()))
    }
}
