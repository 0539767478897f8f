//! Read-only aggregation over the order store.
//!
//! Computes status breakdowns, recent-order listings, and summary reports
//! for the admin-facing report command. No mutation happens here; results
//! reflect the committed state at call time.

use crate::{
    core::status::OrderStatus,
    entities::{Order, order},
    errors::Result,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    DatabaseConnection, PaginatorTrait, QueryOrder, QuerySelect, prelude::*,
};
use std::collections::BTreeMap;

/// How many recent orders a summary includes.
const SUMMARY_RECENT_LIMIT: u64 = 5;

/// Aggregate statistics over the order store.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Total number of orders (within the window, if one was given)
    pub total_orders: u64,
    /// Sum of all order quantities
    pub total_quantity: i64,
    /// Count of orders per status
    pub breakdown: BTreeMap<OrderStatus, u64>,
    /// Most recently placed orders, newest first
    pub recent: Vec<order::Model>,
}

/// Counts orders per status across the whole store.
///
/// # Errors
/// Returns an error if the query fails or a stored status is unknown.
pub async fn status_breakdown(db: &DatabaseConnection) -> Result<BTreeMap<OrderStatus, u64>> {
    breakdown_since(db, None).await
}

/// Returns the most recently placed orders, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn recent_orders(db: &DatabaseConnection, limit: u64) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Builds a summary over the order store, optionally restricted to orders
/// created within the trailing `window`.
///
/// # Errors
/// Returns an error if a query fails or a stored status is unknown.
pub async fn summary(
    db: &DatabaseConnection,
    window: Option<Duration>,
) -> Result<OrderSummary> {
    let since = window.map(|window| Utc::now() - window);

    let mut count_query = Order::find();
    if let Some(since) = since {
        count_query = count_query.filter(order::Column::CreatedAt.gte(since));
    }
    let total_orders = count_query.count(db).await?;

    let mut quantity_query = Order::find()
        .select_only()
        .column_as(order::Column::Quantity.sum(), "total_quantity");
    if let Some(since) = since {
        quantity_query = quantity_query.filter(order::Column::CreatedAt.gte(since));
    }
    // SUM over an empty set is NULL
    let total_quantity: Option<i64> = quantity_query
        .into_tuple()
        .all(db)
        .await?
        .into_iter()
        .next()
        .flatten();

    let breakdown = breakdown_since(db, since).await?;

    let mut recent_query = Order::find()
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .limit(SUMMARY_RECENT_LIMIT);
    if let Some(since) = since {
        recent_query = recent_query.filter(order::Column::CreatedAt.gte(since));
    }
    let recent = recent_query.all(db).await?;

    Ok(OrderSummary {
        total_orders,
        total_quantity: total_quantity.unwrap_or(0),
        breakdown,
        recent,
    })
}

async fn breakdown_since(
    db: &DatabaseConnection,
    since: Option<DateTime<Utc>>,
) -> Result<BTreeMap<OrderStatus, u64>> {
    let mut query = Order::find()
        .select_only()
        .column(order::Column::Status)
        .column_as(order::Column::Id.count(), "count")
        .group_by(order::Column::Status);
    if let Some(since) = since {
        query = query.filter(order::Column::CreatedAt.gte(since));
    }

    let rows: Vec<(String, i64)> = query.into_tuple().all(db).await?;

    let mut breakdown = BTreeMap::new();
    for (status, count) in rows {
        breakdown.insert(
            OrderStatus::parse(&status)?,
            u64::try_from(count).unwrap_or(0),
        );
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::order::{confirm_payment, update_status};
    use crate::test_utils::*;
    use sea_orm::Set;

    #[tokio::test]
    async fn test_breakdown_empty_store() -> Result<()> {
        let db = setup_test_db().await?;

        let breakdown = status_breakdown(&db).await?;
        assert!(breakdown.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_breakdown_sums_to_total() -> Result<()> {
        let db = setup_test_db().await?;

        place_test_order(&db, "alice", "Widget", 1).await?;
        place_test_order(&db, "bob", "Gadget", 2).await?;
        place_test_order(&db, "carol", "Gizmo", 3).await?;
        confirm_payment(&db, "ORD-002", "admin", None).await?;
        update_status(
            &db,
            "ORD-003",
            crate::core::status::OrderStatus::Cancelled,
            "admin",
            None,
            false,
        )
        .await?;

        let breakdown = status_breakdown(&db).await?;
        assert_eq!(breakdown.get(&OrderStatus::Pending), Some(&1));
        assert_eq!(breakdown.get(&OrderStatus::Paid), Some(&1));
        assert_eq!(breakdown.get(&OrderStatus::Cancelled), Some(&1));
        assert_eq!(breakdown.values().sum::<u64>(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_recent_orders_limit_and_order() -> Result<()> {
        let db = setup_test_db().await?;

        place_test_order(&db, "alice", "Widget", 1).await?;
        place_test_order(&db, "bob", "Gadget", 1).await?;
        place_test_order(&db, "carol", "Gizmo", 1).await?;

        let recent = recent_orders(&db, 2).await?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].order_number, "ORD-003");
        assert_eq!(recent[1].order_number, "ORD-002");

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_totals() -> Result<()> {
        let db = setup_test_db().await?;

        place_test_order(&db, "alice", "Widget", 3).await?;
        place_test_order(&db, "bob", "Gadget", 4).await?;

        let summary = summary(&db, None).await?;
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.breakdown.get(&OrderStatus::Pending), Some(&2));
        assert_eq!(summary.recent.len(), 2);
        assert_eq!(summary.recent[0].order_number, "ORD-002");

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_empty_store() -> Result<()> {
        let db = setup_test_db().await?;

        let summary = summary(&db, None).await?;
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_quantity, 0);
        assert!(summary.breakdown.is_empty());
        assert!(summary.recent.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_window_excludes_old_orders() -> Result<()> {
        let db = setup_test_db().await?;

        let old_order = place_test_order(&db, "alice", "Widget", 2).await?;
        place_test_order(&db, "bob", "Gadget", 5).await?;

        // Backdate the first order past the window
        let mut active: crate::entities::order::ActiveModel = old_order.into();
        active.created_at = Set(Utc::now() - Duration::days(10));
        active.update(&db).await?;

        let windowed = summary(&db, Some(Duration::days(7))).await?;
        assert_eq!(windowed.total_orders, 1);
        assert_eq!(windowed.total_quantity, 5);
        assert_eq!(windowed.recent.len(), 1);
        assert_eq!(windowed.recent[0].order_number, "ORD-002");

        let unwindowed = summary(&db, None).await?;
        assert_eq!(unwindowed.total_orders, 2);

        Ok(())
    }
}
