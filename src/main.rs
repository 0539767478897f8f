//! Binary entry point: initializes logging, loads configuration, prepares
//! the database, and runs the Discord bot.

use dotenvy::dotenv;
use order_desk::{bot, config, errors::Result};
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load bot settings (BOT_CONFIG or ./config.toml; defaults if absent)
    let settings = config::settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!("Configuration loaded.");

    // 4. Connect to the database and create tables from the entities
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create database tables: {e}"))?;

    // 5. Run the bot; the token is read directly before use, not stored
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))?;

    bot::run_bot(token, Arc::new(settings), db).await
}
