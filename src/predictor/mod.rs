mod client;
mod predictor_error;

pub use client::{PredictorClient, DEFAULT_API_URL};
pub use predictor_error::PredictorError;
