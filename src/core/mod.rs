//! Core business logic - framework-agnostic order lifecycle, reporting,
//! and notification building. Nothing in this module touches Discord.

/// Notification payload builders for status-change events
pub mod notify;
/// Order store: creation, lookup, search, and status transitions
pub mod order;
/// Read-only aggregation over the order store
pub mod report;
/// Order lifecycle statuses and the transition table
pub mod status;
