use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PredictorError {
    Network(String),
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorError::Network(msg) => write!(f, "Network error: {msg}"),
            PredictorError::Status(code, body) => {
                write!(f, "Prediction API returned HTTP {code}: {body}")
            }
            PredictorError::Decode(msg) => write!(f, "Bad prediction response: {msg}"),
        }
    }
}

impl Error for PredictorError {}
