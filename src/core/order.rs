//! Order store - single source of truth for order state.
//!
//! Provides creation, lookup, search, and status-transition operations over
//! the `orders` and `order_history` tables. Every mutation runs inside one
//! database transaction: order-number allocation happens in the same
//! transaction as the insert so concurrent creations never collide, and
//! transitions read-then-write atomically so concurrent updates serialize.
//! Each mutation appends exactly one history row; history is append-only.

use crate::{
    config::settings::OrderSettings,
    core::status::OrderStatus,
    entities::{Order, OrderHistory, order, order_history},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::info;

const ORDER_NUMBER_PREFIX: &str = "ORD-";

/// Formats a numeric suffix as an order number, e.g. `ORD-001`, `ORD-1000`.
/// Zero-padded to three digits; wider suffixes are not re-padded.
#[must_use]
pub fn format_order_number(suffix: u64) -> String {
    format!("{ORDER_NUMBER_PREFIX}{suffix:03}")
}

/// Extracts the numeric suffix from an order number, if well-formed.
#[must_use]
pub fn parse_order_suffix(order_number: &str) -> Option<u64> {
    order_number.strip_prefix(ORDER_NUMBER_PREFIX)?.parse().ok()
}

/// Optional filters for admin order listings.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Only orders currently in this status
    pub status: Option<OrderStatus>,
    /// Only orders using this payment method
    pub payment_method: Option<String>,
    /// Maximum number of rows to return
    pub limit: Option<u64>,
}

/// Creates a new order in Pending status and logs the creation event.
///
/// Validates the product name and quantity against the configured bounds
/// and resolves the payment method (the configured default when none is
/// given). The order number is allocated as the highest existing numeric
/// suffix plus one, read inside the same transaction as the insert.
///
/// # Errors
/// Returns [`Error::Validation`] for out-of-range input and
/// [`Error::Database`] if persistence fails.
pub async fn create_order(
    db: &DatabaseConnection,
    settings: &OrderSettings,
    user_id: String,
    username: String,
    product_name: String,
    quantity: i32,
    payment_method: Option<String>,
) -> Result<order::Model> {
    let product_name = product_name.trim().to_string();
    if product_name.chars().count() < settings.min_product_name_length {
        return Err(Error::Validation {
            message: format!(
                "Product name must be at least {} characters",
                settings.min_product_name_length
            ),
        });
    }
    if quantity < 1 {
        return Err(Error::Validation {
            message: "Quantity must be a positive number".to_string(),
        });
    }
    if quantity > settings.max_quantity {
        return Err(Error::Validation {
            message: format!(
                "Quantity cannot exceed {} items per order",
                settings.max_quantity
            ),
        });
    }
    let payment_method = match payment_method {
        Some(method) => {
            if !settings
                .payment_methods
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&method))
            {
                return Err(Error::Validation {
                    message: format!("Unknown payment method '{method}'"),
                });
            }
            method
        }
        None => settings.default_payment_method.clone(),
    };

    let now = Utc::now();
    let txn = db.begin().await?;

    // Allocate the next sequential number inside the transaction so two
    // concurrent creations cannot read the same maximum.
    let latest = Order::find()
        .order_by_desc(order::Column::Id)
        .one(&txn)
        .await?;
    let next_suffix = latest
        .and_then(|existing| parse_order_suffix(&existing.order_number))
        .unwrap_or(0)
        + 1;
    let order_number = format_order_number(next_suffix);

    let created = order::ActiveModel {
        order_number: Set(order_number.clone()),
        user_id: Set(user_id),
        username: Set(username.clone()),
        product_name: Set(product_name),
        quantity: Set(quantity),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        payment_method: Set(payment_method),
        created_at: Set(now),
        updated_at: Set(now),
        confirmed_by: Set(None),
        notes: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    append_history(
        &txn,
        &order_number,
        None,
        OrderStatus::Pending,
        &username,
        now,
        Some("Order created".to_string()),
    )
    .await?;

    txn.commit().await?;

    info!(
        "Created order {} for user {}",
        created.order_number, created.username
    );
    Ok(created)
}

/// Looks up an order by its exact order number.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order(
    db: &DatabaseConnection,
    order_number: &str,
) -> Result<Option<order::Model>> {
    Order::find()
        .filter(order::Column::OrderNumber.eq(order_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all orders placed by a user, most recent first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_orders_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::UserId.eq(user_id))
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists orders matching the given filters, most recent first.
/// Used by the admin view.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_orders(
    db: &DatabaseConnection,
    filter: &OrderFilter,
) -> Result<Vec<order::Model>> {
    let mut query = Order::find();
    if let Some(status) = filter.status {
        query = query.filter(order::Column::Status.eq(status.as_str()));
    }
    if let Some(method) = &filter.payment_method {
        query = query.filter(order::Column::PaymentMethod.eq(method.as_str()));
    }
    query
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .limit(filter.limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches orders by order-number prefix, username substring, or product
/// name substring (the latter two case-insensitive). A single query with
/// OR'd conditions, so an order matching several fields appears once.
/// Results are most recent first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn search_orders(
    db: &DatabaseConnection,
    query: &str,
    limit: Option<u64>,
) -> Result<Vec<order::Model>> {
    let term = query.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let condition = Condition::any()
        .add(order::Column::OrderNumber.starts_with(term.to_uppercase()))
        .add(order::Column::Username.contains(term))
        .add(order::Column::ProductName.contains(term));

    Order::find()
        .filter(condition)
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Confirms payment for a Pending order, moving it to Paid.
///
/// Records the confirming admin in `confirmed_by`, bumps `updated_at`, and
/// appends a Pending -> Paid history entry, all in one transaction.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] for an unknown order number and
/// [`Error::InvalidTransition`] if the order is not Pending.
pub async fn confirm_payment(
    db: &DatabaseConnection,
    order_number: &str,
    admin: &str,
    notes: Option<String>,
) -> Result<order::Model> {
    let txn = db.begin().await?;

    let existing = find_in_txn(&txn, order_number).await?;
    let current = OrderStatus::parse(&existing.status)?;
    if current != OrderStatus::Pending {
        return Err(Error::InvalidTransition {
            from: current.to_string(),
            to: OrderStatus::Paid.to_string(),
        });
    }

    let now = Utc::now();
    let mut active: order::ActiveModel = existing.into();
    active.status = Set(OrderStatus::Paid.as_str().to_string());
    active.confirmed_by = Set(Some(admin.to_string()));
    active.updated_at = Set(now);
    if notes.is_some() {
        active.notes = Set(notes.clone());
    }
    let updated = active.update(&txn).await?;

    append_history(
        &txn,
        order_number,
        Some(current),
        OrderStatus::Paid,
        admin,
        now,
        notes.or_else(|| Some("Payment confirmed".to_string())),
    )
    .await?;

    txn.commit().await?;

    info!("Payment confirmed for order {order_number} by {admin}");
    Ok(updated)
}

/// Moves an order to a new status, guarded by the transition table.
///
/// Under the default policy only forward, single-stage transitions (plus
/// cancellation of non-terminal orders) are permitted. With
/// `allow_override` any change except a same-status no-op is accepted.
/// When the change happens to be Pending -> Paid, `confirmed_by` is
/// recorded just as in [`confirm_payment`]. Appends one history entry.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] for an unknown order number and
/// [`Error::InvalidTransition`] if the change is not permitted.
pub async fn update_status(
    db: &DatabaseConnection,
    order_number: &str,
    new_status: OrderStatus,
    admin: &str,
    notes: Option<String>,
    allow_override: bool,
) -> Result<order::Model> {
    let txn = db.begin().await?;

    let existing = find_in_txn(&txn, order_number).await?;
    let current = OrderStatus::parse(&existing.status)?;
    let permitted = if allow_override {
        current != new_status
    } else {
        current.can_transition_to(new_status)
    };
    if !permitted {
        return Err(Error::InvalidTransition {
            from: current.to_string(),
            to: new_status.to_string(),
        });
    }

    let now = Utc::now();
    let mut active: order::ActiveModel = existing.into();
    active.status = Set(new_status.as_str().to_string());
    active.updated_at = Set(now);
    if current == OrderStatus::Pending && new_status == OrderStatus::Paid {
        active.confirmed_by = Set(Some(admin.to_string()));
    }
    if notes.is_some() {
        active.notes = Set(notes.clone());
    }
    let updated = active.update(&txn).await?;

    append_history(&txn, order_number, Some(current), new_status, admin, now, notes).await?;

    txn.commit().await?;

    info!("Updated order {order_number} from {current} to {new_status} by {admin}");
    Ok(updated)
}

/// Returns the full audit trail for an order, oldest entry first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order_history(
    db: &DatabaseConnection,
    order_number: &str,
) -> Result<Vec<order_history::Model>> {
    OrderHistory::find()
        .filter(order_history::Column::OrderNumber.eq(order_number))
        .order_by_asc(order_history::Column::ChangedAt)
        .order_by_asc(order_history::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

async fn find_in_txn<C: ConnectionTrait>(db: &C, order_number: &str) -> Result<order::Model> {
    Order::find()
        .filter(order::Column::OrderNumber.eq(order_number))
        .one(db)
        .await?
        .ok_or_else(|| Error::OrderNotFound {
            order_number: order_number.to_string(),
        })
}

async fn append_history<C: ConnectionTrait>(
    db: &C,
    order_number: &str,
    status_from: Option<OrderStatus>,
    status_to: OrderStatus,
    changed_by: &str,
    changed_at: DateTime<Utc>,
    notes: Option<String>,
) -> Result<order_history::Model> {
    order_history::ActiveModel {
        order_number: Set(order_number.to_string()),
        status_from: Set(status_from.map(|status| status.as_str().to_string())),
        status_to: Set(status_to.as_str().to_string()),
        changed_by: Set(changed_by.to_string()),
        changed_at: Set(changed_at),
        notes: Set(notes),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
