/// Database connection and table creation
pub mod database;

/// Typed bot settings loaded from config.toml
pub mod settings;
