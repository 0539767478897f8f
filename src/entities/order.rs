//! Order entity - Represents a customer order in the tracking system.
//!
//! Each order carries a unique human-readable order number (`ORD-NNN`), the
//! identity of the Discord user who placed it, product details, and its
//! current lifecycle status. Orders are never physically deleted; their full
//! status history lives in the `order_history` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique row identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable unique order number (e.g., `"ORD-001"`), assigned once
    /// at creation and never mutated or reused
    #[sea_orm(unique)]
    pub order_number: String,
    /// Discord user ID of the customer who placed the order
    pub user_id: String,
    /// Display name of the customer at the time of ordering
    pub username: String,
    /// Free-text product being ordered
    pub product_name: String,
    /// Number of items ordered (validated against configured bounds)
    pub quantity: i32,
    /// Current lifecycle status; always one of the `OrderStatus` names
    pub status: String,
    /// Payment method (e.g., `"PayPal"`), defaulted from configuration
    pub payment_method: String,
    /// When the order was placed (UTC)
    pub created_at: DateTimeUtc,
    /// When the order was last transitioned (UTC); >= `created_at`
    pub updated_at: DateTimeUtc,
    /// Admin who confirmed payment, None until confirmation
    pub confirmed_by: Option<String>,
    /// Optional free-text notes attached at the latest transition
    pub notes: Option<String>,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has many history entries
    #[sea_orm(has_many = "super::order_history::Entity")]
    History,
}

impl Related<super::order_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
