// templates/pages/home.rs

use crate::domain::{OrderRecord, PaymentType, Service};
use crate::templates::{
    components::{card, checkbox_field, float_field, number_field, select_field, text_field},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    order_form_page(&OrderRecord::default())
}

/// The whole order form, pre-filled from `defaults`. Submission goes
/// through htmx: the button stays disabled while the request is in
/// flight and the response fragment lands in `#predict-result`,
/// replacing any previous verdict or error banner.
pub fn order_form_page(defaults: &OrderRecord) -> Markup {
    let service_options: Vec<(&str, &str)> = Service::ALL
        .iter()
        .map(|s| (s.as_str(), s.as_str()))
        .collect();
    let payment_options: Vec<(&str, &str)> = PaymentType::ALL
        .iter()
        .map(|p| (p.as_str(), p.label()))
        .collect();
    let courier = defaults.is_courier.to_string();

    desktop_layout(
        "Fraud Check",
        html! {
            main {
                (card("Fraud Detection System", html! {
                    form
                        hx-post="/check"
                        hx-target="#predict-result"
                        hx-swap="innerHTML"
                        hx-disabled-elt="find button"
                    {
                        div class="form-grid" {
                            (number_field("User ID", "user_id", defaults.user_id))
                            (number_field("Product ID", "nm_id", defaults.nm_id))
                            (text_field("Created Date", "created_date", &defaults.created_date))
                            (select_field("Service Region", "service", &service_options, defaults.service.as_str()))
                            (number_field("Total Ordered", "total_ordered", defaults.total_ordered))
                            (select_field("Payment Type", "payment_type", &payment_options, defaults.payment_type.as_str()))
                            (checkbox_field("Order already paid", "is_paid", defaults.is_paid))
                            (number_field("Count Items", "count_items", defaults.count_items))
                            (number_field("Unique Items", "unique_items", defaults.unique_items))
                            (float_field("Avg Unique Purchase", "avg_unique_purchase", defaults.avg_unique_purchase))
                            (select_field("Delivery Method", "is_courier", &[("0", "Pickup Point"), ("1", "Courier")], &courier))
                            (number_field("Product Age (days)", "nm_age", defaults.nm_age))
                            (float_field("Distance (km)", "distance", defaults.distance))
                            (number_field("Days After Registration", "days_after_registration", defaults.days_after_registration))
                            (number_field("Number of Orders", "number_of_orders", defaults.number_of_orders))
                            (number_field("Number of Ordered Items", "number_of_ordered_items", defaults.number_of_ordered_items))
                            (float_field("Mean Ordered Items", "mean_number_of_ordered_items", defaults.mean_number_of_ordered_items))
                            (number_field("Min Ordered Items", "min_number_of_ordered_items", defaults.min_number_of_ordered_items))
                            (number_field("Max Ordered Items", "max_number_of_ordered_items", defaults.max_number_of_ordered_items))
                            (float_field("Mean Percent Ordered (0-100)", "mean_percent_of_ordered_items", defaults.mean_percent_of_ordered_items))
                        }

                        button type="submit" class="primary" {
                            "Check for Fraud"
                        }
                    }

                    div id="predict-result" {}
                }))
            }
        },
    )
}
