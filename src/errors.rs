//! Unified error types for the order tracking system.
//!
//! All fallible operations in the crate return [`Result`], which wraps the
//! single [`Error`] enum. Core operations surface typed failures
//! (validation, unknown order, illegal transition) so the bot layer can
//! translate them into user-facing messages; storage failures propagate
//! unmodified and are never retried internally.

use thiserror::Error;

/// Unified error type for all order-desk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or value problem
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Caller-supplied input failed validation (quantity bounds, name length)
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// No order exists with the given order number
    #[error("Order '{order_number}' not found")]
    OrderNotFound {
        /// The order number that was looked up
        order_number: String,
    },

    /// A status change was attempted that the lifecycle does not permit
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the order currently has
        from: String,
        /// Status that was requested
        to: String,
    },

    /// A persisted status string did not name a known status
    #[error("Unknown order status '{value}'")]
    UnknownStatus {
        /// The unrecognized value
        value: String,
    },

    /// Underlying persistence failure, surfaced as-is
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config file reads, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
