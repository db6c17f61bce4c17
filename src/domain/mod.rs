mod form;
mod order;

pub use form::{FieldError, OrderForm};
pub use order::{OrderRecord, PaymentType, PredictionResult, Service};
