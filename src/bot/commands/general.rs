//! General Discord commands - ping and help.
//! Simple commands that don't require database operations and provide
//! basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**OrderDesk Help**\n\
        Here is a summary of all available commands.\n\n\
        **Customer Commands**\n\
        • `/place_order <product> <quantity> [payment_method]` - Places a new order.\n\
        • `/my_orders` - Shows your orders, most recent first.\n\
        • `/order_status <order_number>` - Shows one order's details and history.\n\n\
        **Admin Commands**\n\
        • `/confirm_payment <order_number> [notes]` - Confirms payment for a pending order.\n\
        • `/update_order_status <order_number> <status> [notes]` - Moves an order to a new status.\n\
        • `/view_orders [status] [limit]` - Lists orders, optionally filtered by status.\n\
        • `/search_orders <query>` - Searches by order number, customer, or product.\n\
        • `/order_report` - Shows order statistics.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        The bot also replies to configured keywords mentioned in messages.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
