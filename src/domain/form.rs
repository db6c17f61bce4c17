use crate::domain::{OrderRecord, PaymentType, Service};
use std::collections::HashMap;

/// A single validation failure, keyed by the wire field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// The raw order submission exactly as it arrives from the urlencoded
/// POST body: one string per field, missing fields as empty strings.
/// `validate` is the only way to turn it into an `OrderRecord`.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub user_id: String,
    pub nm_id: String,
    pub created_date: String,
    pub service: String,
    pub total_ordered: String,
    pub payment_type: String,
    pub is_paid: bool,
    pub count_items: String,
    pub unique_items: String,
    pub avg_unique_purchase: String,
    pub is_courier: String,
    pub nm_age: String,
    pub distance: String,
    pub days_after_registration: String,
    pub number_of_orders: String,
    pub number_of_ordered_items: String,
    pub mean_number_of_ordered_items: String,
    pub min_number_of_ordered_items: String,
    pub max_number_of_ordered_items: String,
    pub mean_percent_of_ordered_items: String,
}

impl OrderForm {
    pub fn from_params(mut params: HashMap<String, String>) -> Self {
        let mut take = |key: &str| params.remove(key).unwrap_or_default();

        OrderForm {
            user_id: take("user_id"),
            nm_id: take("nm_id"),
            created_date: take("created_date"),
            service: take("service"),
            total_ordered: take("total_ordered"),
            payment_type: take("payment_type"),
            // Checkbox: absent means unchecked.
            is_paid: matches!(take("is_paid").as_str(), "on" | "true" | "1"),
            count_items: take("count_items"),
            unique_items: take("unique_items"),
            avg_unique_purchase: take("avg_unique_purchase"),
            is_courier: take("is_courier"),
            nm_age: take("nm_age"),
            distance: take("distance"),
            days_after_registration: take("days_after_registration"),
            number_of_orders: take("number_of_orders"),
            number_of_ordered_items: take("number_of_ordered_items"),
            mean_number_of_ordered_items: take("mean_number_of_ordered_items"),
            min_number_of_ordered_items: take("min_number_of_ordered_items"),
            max_number_of_ordered_items: take("max_number_of_ordered_items"),
            mean_percent_of_ordered_items: take("mean_percent_of_ordered_items"),
        }
    }

    /// Parse and check every field. All failures are collected so the
    /// form can show one message per offending field; a single failure
    /// is enough to block the upstream call.
    pub fn validate(&self) -> Result<OrderRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let user_id = int_min(&mut errors, "user_id", &self.user_id, 1);
        let nm_id = int_min(&mut errors, "nm_id", &self.nm_id, 1);

        if self.created_date.trim().is_empty() {
            errors.push(FieldError::new("created_date", "is required"));
        }

        let service = match self.service.parse::<Service>() {
            Ok(s) => s,
            Err(()) => {
                errors.push(FieldError::new("service", "must be one of nnsz, ordo"));
                Service::Nnsz
            }
        };

        let total_ordered = int_min(&mut errors, "total_ordered", &self.total_ordered, 1);

        let payment_type = match self.payment_type.parse::<PaymentType>() {
            Ok(p) => p,
            Err(()) => {
                errors.push(FieldError::new(
                    "payment_type",
                    "must be one of CSH, CRD, BAL, WPG",
                ));
                PaymentType::Csh
            }
        };

        let count_items = int_min(&mut errors, "count_items", &self.count_items, 0);
        let unique_items = int_min(&mut errors, "unique_items", &self.unique_items, 0);
        let avg_unique_purchase =
            float_min(&mut errors, "avg_unique_purchase", &self.avg_unique_purchase);

        let is_courier = int_min(&mut errors, "is_courier", &self.is_courier, 0);
        if is_courier > 1 {
            errors.push(FieldError::new("is_courier", "must be 0 or 1"));
        }

        let nm_age = int_min(&mut errors, "nm_age", &self.nm_age, 0);
        let distance = float_min(&mut errors, "distance", &self.distance);
        let days_after_registration = int_min(
            &mut errors,
            "days_after_registration",
            &self.days_after_registration,
            0,
        );
        let number_of_orders = int_min(&mut errors, "number_of_orders", &self.number_of_orders, 0);
        let number_of_ordered_items = int_min(
            &mut errors,
            "number_of_ordered_items",
            &self.number_of_ordered_items,
            0,
        );
        let mean_number_of_ordered_items = float_min(
            &mut errors,
            "mean_number_of_ordered_items",
            &self.mean_number_of_ordered_items,
        );
        let min_number_of_ordered_items = int_min(
            &mut errors,
            "min_number_of_ordered_items",
            &self.min_number_of_ordered_items,
            0,
        );
        let max_number_of_ordered_items = int_min(
            &mut errors,
            "max_number_of_ordered_items",
            &self.max_number_of_ordered_items,
            0,
        );

        let mean_percent_of_ordered_items = float_min(
            &mut errors,
            "mean_percent_of_ordered_items",
            &self.mean_percent_of_ordered_items,
        );
        if mean_percent_of_ordered_items > 100.0 {
            errors.push(FieldError::new(
                "mean_percent_of_ordered_items",
                "must be between 0 and 100",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OrderRecord {
            user_id,
            nm_id,
            created_date: self.created_date.trim().to_string(),
            service,
            total_ordered,
            payment_type,
            is_paid: self.is_paid,
            count_items,
            unique_items,
            avg_unique_purchase,
            is_courier,
            nm_age,
            distance,
            days_after_registration,
            number_of_orders,
            number_of_ordered_items,
            mean_number_of_ordered_items,
            min_number_of_ordered_items,
            max_number_of_ordered_items,
            mean_percent_of_ordered_items,
        })
    }
}

fn int_min(errors: &mut Vec<FieldError>, field: &'static str, raw: &str, min: i64) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= min => value,
        Ok(_) => {
            errors.push(FieldError::new(field, format!("must be at least {min}")));
            min
        }
        Err(_) => {
            errors.push(FieldError::new(field, "must be a whole number"));
            min
        }
    }
}

/// An unparsable float is carried forward as NaN, which then fails the
/// `>= 0` comparison and surfaces as a normal field message.
fn float_min(errors: &mut Vec<FieldError>, field: &'static str, raw: &str) -> f64 {
    let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    if !(value >= 0.0) {
        errors.push(FieldError::new(field, "must be a number of zero or greater"));
    }
    value
}
