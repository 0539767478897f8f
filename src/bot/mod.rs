//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the order tracking system,
//! including all slash commands, the keyword auto-response handler, and bot
//! context management. Core operations never appear here without going
//! through `crate::core`.

/// Discord command implementations (order, admin, general)
pub mod commands;
/// Discord event handlers (keyword responses)
pub mod handlers;

use crate::config::settings::BotSettings;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;

/// Shared data available to all bot commands and handlers.
pub struct BotData {
    /// Database connection for all order operations
    pub database: DatabaseConnection,
    /// Bot settings loaded from config.toml
    pub settings: Arc<BotSettings>,
}

impl BotData {
    /// Creates a new `BotData` instance. Called once during bot setup.
    #[must_use]
    pub const fn new(database: DatabaseConnection, settings: Arc<BotSettings>) -> Self {
        Self { database, settings }
    }
}

/// Poise context type used by all commands in this crate.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework, registers all slash commands globally, and
/// runs the bot until the client stops.
///
/// # Errors
/// Returns an error if the Discord client cannot be created or exits with a
/// failure.
pub async fn run_bot(
    token: String,
    settings: Arc<BotSettings>,
    database: DatabaseConnection,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::place_order(),
                commands::my_orders(),
                commands::order_status(),
                commands::confirm_payment(),
                commands::update_order_status(),
                commands::view_orders(),
                commands::search_orders(),
                commands::order_report(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::keywords::handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database, settings))
            })
        })
        .build();

    // MESSAGE_CONTENT is required for the keyword auto-responses
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .map_err(Error::from)?;

    client.start().await.map_err(Error::from)
}
