//! Notification payload builders.
//!
//! Pure functions from an order plus a lifecycle event to a structured
//! notification payload. Delivery is the bot layer's job; a failed delivery
//! is a non-fatal warning and never rolls back the committed transition.

use crate::{core::status::OrderStatus, entities::order};

/// How prominently a notification should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral status update
    Info,
    /// Good news (order placed, payment confirmed, completed)
    Success,
    /// Something the recipient should look at (cancellation)
    Warning,
}

/// A user-facing notification, ready for the transport layer to render.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Platform user ID of the recipient
    pub recipient_id: String,
    /// Short headline
    pub title: String,
    /// One-line summary under the headline
    pub description: String,
    /// Labelled detail fields, in display order
    pub fields: Vec<(String, String)>,
    /// Rendering hint
    pub severity: Severity,
}

/// Builds the confirmation shown to a customer after placing an order.
#[must_use]
pub fn order_placed(order: &order::Model) -> Notification {
    Notification {
        recipient_id: order.user_id.clone(),
        title: "🛍️ Order Placed Successfully!".to_string(),
        description: "Your order has been created and is waiting for payment confirmation."
            .to_string(),
        fields: vec![
            ("Order Number".to_string(), order.order_number.clone()),
            ("Product".to_string(), order.product_name.clone()),
            ("Quantity".to_string(), order.quantity.to_string()),
            ("Status".to_string(), order.status.clone()),
            ("Payment Method".to_string(), order.payment_method.clone()),
        ],
        severity: Severity::Success,
    }
}

/// Builds the DM sent to a customer when an admin confirms their payment.
#[must_use]
pub fn payment_confirmed(order: &order::Model, confirmed_by: &str, notes: Option<&str>) -> Notification {
    let mut fields = vec![
        ("Order Number".to_string(), order.order_number.clone()),
        ("Product".to_string(), order.product_name.clone()),
        ("Quantity".to_string(), order.quantity.to_string()),
        ("Status".to_string(), order.status.clone()),
        ("Confirmed By".to_string(), confirmed_by.to_string()),
    ];
    if let Some(notes) = notes {
        fields.push(("Notes".to_string(), notes.to_string()));
    }
    fields.push((
        "Next Steps".to_string(),
        "Your order is now paid and will be processed soon!".to_string(),
    ));

    Notification {
        recipient_id: order.user_id.clone(),
        title: "✅ Payment Confirmed!".to_string(),
        description: format!(
            "Your payment for order {} has been confirmed!",
            order.order_number
        ),
        fields,
        severity: Severity::Success,
    }
}

/// Builds the DM sent to a customer when their order's status changes.
/// The order model already carries the new status.
#[must_use]
pub fn status_changed(order: &order::Model, changed_by: &str, notes: Option<&str>) -> Notification {
    let mut fields = vec![
        ("Order Number".to_string(), order.order_number.clone()),
        ("Product".to_string(), order.product_name.clone()),
        ("New Status".to_string(), order.status.clone()),
        ("Updated By".to_string(), changed_by.to_string()),
    ];
    if let Some(notes) = notes {
        fields.push(("Notes".to_string(), notes.to_string()));
    }

    let severity = match OrderStatus::parse(&order.status) {
        Ok(OrderStatus::Completed | OrderStatus::Paid) => Severity::Success,
        Ok(OrderStatus::Cancelled) => Severity::Warning,
        _ => Severity::Info,
    };

    Notification {
        recipient_id: order.user_id.clone(),
        title: "📋 Order Status Updated".to_string(),
        description: format!(
            "Your order {} status has been updated!",
            order.order_number
        ),
        fields,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_order(status: OrderStatus) -> order::Model {
        let now = Utc::now();
        order::Model {
            id: 1,
            order_number: "ORD-001".to_string(),
            user_id: "12345".to_string(),
            username: "alice".to_string(),
            product_name: "Widget".to_string(),
            quantity: 3,
            status: status.as_str().to_string(),
            payment_method: "PayPal".to_string(),
            created_at: now,
            updated_at: now,
            confirmed_by: None,
            notes: None,
        }
    }

    #[test]
    fn test_order_placed_payload() {
        let notification = order_placed(&sample_order(OrderStatus::Pending));

        assert_eq!(notification.recipient_id, "12345");
        assert_eq!(notification.severity, Severity::Success);
        assert!(notification.title.contains("Order Placed"));
        assert!(
            notification
                .fields
                .iter()
                .any(|(name, value)| name == "Order Number" && value == "ORD-001")
        );
        assert!(
            notification
                .fields
                .iter()
                .any(|(name, value)| name == "Quantity" && value == "3")
        );
    }

    #[test]
    fn test_payment_confirmed_payload() {
        let notification =
            payment_confirmed(&sample_order(OrderStatus::Paid), "bob", Some("via PayPal"));

        assert_eq!(notification.severity, Severity::Success);
        assert!(notification.description.contains("ORD-001"));
        assert!(
            notification
                .fields
                .iter()
                .any(|(name, value)| name == "Confirmed By" && value == "bob")
        );
        assert!(
            notification
                .fields
                .iter()
                .any(|(name, value)| name == "Notes" && value == "via PayPal")
        );
    }

    #[test]
    fn test_payment_confirmed_without_notes() {
        let notification = payment_confirmed(&sample_order(OrderStatus::Paid), "bob", None);
        assert!(notification.fields.iter().all(|(name, _)| name != "Notes"));
    }

    #[test]
    fn test_status_changed_severity() {
        let completed = status_changed(&sample_order(OrderStatus::Completed), "bob", None);
        assert_eq!(completed.severity, Severity::Success);

        let cancelled = status_changed(&sample_order(OrderStatus::Cancelled), "bob", None);
        assert_eq!(cancelled.severity, Severity::Warning);

        let processing = status_changed(&sample_order(OrderStatus::Processing), "bob", None);
        assert_eq!(processing.severity, Severity::Info);
    }
}
