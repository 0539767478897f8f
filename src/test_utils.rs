//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases and placing orders with
//! sensible defaults, used by the integration tests throughout the crate.

use crate::{
    config::settings::OrderSettings,
    core::order::create_order,
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Default order settings used across tests (max quantity 100, minimum
/// product name length 2, `PayPal` only).
#[must_use]
pub fn test_settings() -> OrderSettings {
    OrderSettings::default()
}

/// Places an order with default settings and the default payment method.
/// The user ID is derived from the username as `"<username>-id"`.
pub async fn place_test_order(
    db: &DatabaseConnection,
    username: &str,
    product_name: &str,
    quantity: i32,
) -> Result<entities::order::Model> {
    place_order_for(
        db,
        &format!("{username}-id"),
        username,
        product_name,
        quantity,
    )
    .await
}

/// Places an order with an explicit user ID.
pub async fn place_order_for(
    db: &DatabaseConnection,
    user_id: &str,
    username: &str,
    product_name: &str,
    quantity: i32,
) -> Result<entities::order::Model> {
    create_order(
        db,
        &test_settings(),
        user_id.to_string(),
        username.to_string(),
        product_name.to_string(),
        quantity,
        None,
    )
    .await
}

/// Sets up a database with one Pending order already placed.
/// Returns (db, order) for common test scenarios.
pub async fn setup_with_order() -> Result<(DatabaseConnection, entities::order::Model)> {
    let db = setup_test_db().await?;
    let order = place_test_order(&db, "alice", "Widget", 3).await?;
    Ok((db, order))
}
