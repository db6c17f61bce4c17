pub mod html;
pub mod json;

pub use html::html_response;
pub use json::json_response;
