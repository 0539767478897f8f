//! Discord event handlers.

/// Keyword auto-response handler for incoming messages
pub mod keywords;
