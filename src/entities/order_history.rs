//! Order history entity - Append-only audit trail of status changes.
//!
//! Every order mutation (creation included) appends exactly one row here.
//! Rows reference their order by `order_number` value, are ordered by
//! `changed_at`, and are never updated or deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order history database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_history")]
pub struct Model {
    /// Unique row identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Order number this entry belongs to
    pub order_number: String,
    /// Status before the change; None for the creation event
    pub status_from: Option<String>,
    /// Status after the change
    pub status_to: String,
    /// Actor who made the change (customer for creation, admin afterwards)
    pub changed_by: String,
    /// When the change happened (UTC)
    pub changed_at: DateTimeUtc,
    /// Optional free-text notes for this change
    pub notes: Option<String>,
}

/// Defines relationships between `OrderHistory` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each history entry belongs to one order, referenced by order number
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderNumber",
        to = "super::order::Column::OrderNumber"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
