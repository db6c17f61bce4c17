use crate::domain::{FieldError, PredictionResult};
use maud::{html, Markup};

/// Verdict fragment swapped into `#predict-result` on a 2xx response.
pub fn verdict_alert(result: &PredictionResult) -> Markup {
    let (class, title) = if result.is_fraud {
        ("alert alert-fraud", "Fraud Detected!")
    } else {
        ("alert alert-ok", "Legitimate Order")
    };

    html! {
        div class=(class) {
            h3 { (title) }
            p { (format!("Confidence: {:.2}%", result.confidence * 100.0)) }
        }
    }
}

/// Single banner for upstream failures (non-2xx status or transport
/// error). Replaces whatever was in the result slot before.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="alert alert-error" {
            h3 { "Error" }
            p { (message) }
        }
    }
}

/// One line per failing field; shown instead of calling the API.
pub fn validation_errors(errors: &[FieldError]) -> Markup {
    html! {
        div class="alert alert-error" {
            h3 { "Please fix the following fields" }
            ul {
                @for err in errors {
                    li { strong { (err.field) } " " (err.message) }
                }
            }
        }
    }
}
