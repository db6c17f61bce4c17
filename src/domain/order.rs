use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marketplace service region the order was placed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Nnsz,
    Ordo,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Nnsz, Service::Ordo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Nnsz => "nnsz",
            Service::Ordo => "ordo",
        }
    }
}

impl FromStr for Service {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nnsz" => Ok(Service::Nnsz),
            "ordo" => Ok(Service::Ordo),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Csh,
    Crd,
    Bal,
    Wpg,
}

impl PaymentType {
    pub const ALL: [PaymentType; 4] = [
        PaymentType::Csh,
        PaymentType::Crd,
        PaymentType::Bal,
        PaymentType::Wpg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Csh => "CSH",
            PaymentType::Crd => "CRD",
            PaymentType::Bal => "BAL",
            PaymentType::Wpg => "WPG",
        }
    }

    /// Human label for the payment select.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Csh => "Cash",
            PaymentType::Crd => "Credit Card",
            PaymentType::Bal => "Balance",
            PaymentType::Wpg => "Wire Payment",
        }
    }
}

impl FromStr for PaymentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSH" => Ok(PaymentType::Csh),
            "CRD" => Ok(PaymentType::Crd),
            "BAL" => Ok(PaymentType::Bal),
            "WPG" => Ok(PaymentType::Wpg),
            _ => Err(()),
        }
    }
}

/// One e-commerce order plus the derived behavioral features the
/// prediction API scores on. Field names and types match the wire
/// schema of `POST /predict` exactly.
///
/// Built only through `OrderForm::validate`, so a value of this type
/// always satisfies every field constraint. No setters; the record is
/// frozen once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub user_id: i64,
    pub nm_id: i64,
    pub created_date: String,
    pub service: Service,
    pub total_ordered: i64,
    pub payment_type: PaymentType,
    pub is_paid: bool,
    pub count_items: i64,
    pub unique_items: i64,
    pub avg_unique_purchase: f64,
    pub is_courier: i64,
    pub nm_age: i64,
    pub distance: f64,
    pub days_after_registration: i64,
    pub number_of_orders: i64,
    pub number_of_ordered_items: i64,
    pub mean_number_of_ordered_items: f64,
    pub min_number_of_ordered_items: i64,
    pub max_number_of_ordered_items: i64,
    pub mean_percent_of_ordered_items: f64,
}

impl Default for OrderRecord {
    /// Pre-filled example order shown when the form first loads.
    fn default() -> Self {
        OrderRecord {
            user_id: 35434,
            nm_id: 37225,
            created_date: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            service: Service::Nnsz,
            total_ordered: 854,
            payment_type: PaymentType::Csh,
            is_paid: false,
            count_items: 0,
            unique_items: 0,
            avg_unique_purchase: 0.0,
            is_courier: 0,
            nm_age: 114,
            distance: 913.0,
            days_after_registration: 1078,
            number_of_orders: 1,
            number_of_ordered_items: 854,
            mean_number_of_ordered_items: 854.0,
            min_number_of_ordered_items: 854,
            max_number_of_ordered_items: 854,
            mean_percent_of_ordered_items: 100.0,
        }
    }
}

/// Verdict returned by the prediction API for one order.
/// Held only in the response fragment; replaced on each submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: f64,
    pub confidence: f64,
    pub is_fraud: bool,
}
