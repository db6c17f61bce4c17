use maud::{html, Markup};

pub mod alert;
pub mod error;
pub mod field;

pub use alert::{error_banner, validation_errors, verdict_alert};
pub use error::html_error_response;
pub use field::{checkbox_field, float_field, number_field, select_field, text_field};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
