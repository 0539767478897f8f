//! Admin-only order management commands.
//!
//! Payment confirmation, status updates, listing, search, and reporting.
//! The admin gate is a role-name check against the configured `admin_roles`;
//! the core is never responsible for authorization. After a successful
//! transition the customer is notified by DM; a failed DM is reported in the
//! command reply but never undoes the committed change.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        bot::commands::{deliver_notification, emoji_for, ensure_admin, status_emoji},
        core::{notify, order, report, status::OrderStatus},
        errors::{Error, Result},
    };
    use chrono::Duration;
    use poise::serenity_prelude as serenity;

    /// Status values selectable in the `update_order_status` command.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum StatusChoice {
        #[name = "Pending"]
        Pending,
        #[name = "Paid"]
        Paid,
        #[name = "Processing"]
        Processing,
        #[name = "Completed"]
        Completed,
        #[name = "Cancelled"]
        Cancelled,
    }

    impl From<StatusChoice> for OrderStatus {
        fn from(choice: StatusChoice) -> Self {
            match choice {
                StatusChoice::Pending => Self::Pending,
                StatusChoice::Paid => Self::Paid,
                StatusChoice::Processing => Self::Processing,
                StatusChoice::Completed => Self::Completed,
                StatusChoice::Cancelled => Self::Cancelled,
            }
        }
    }

    /// Confirms payment for a pending order (admin only).
    ///
    /// Moves the order from Pending to Paid, records who confirmed it, and
    /// DMs the customer.
    #[poise::command(slash_command, prefix_command)]
    pub async fn confirm_payment(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Order number (e.g., ORD-001)"] order_number: String,
        #[description = "Optional notes about the payment confirmation"] notes: Option<String>,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let data = ctx.data();
        let order_number = order_number.trim().to_uppercase();
        let admin = ctx.author().display_name().to_string();

        match order::confirm_payment(&data.database, &order_number, &admin, notes.clone()).await {
            Ok(confirmed) => {
                let notification =
                    notify::payment_confirmed(&confirmed, &admin, notes.as_deref());
                let delivered = deliver_notification(&ctx, &notification).await;
                let suffix = if delivered {
                    "User has been notified."
                } else {
                    "Could not DM the user."
                };
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!(
                            "✅ Payment confirmed for order {}! {suffix}",
                            confirmed.order_number
                        ))
                        .ephemeral(true),
                )
                .await?;
            }
            Err(Error::OrderNotFound { .. }) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content("❌ Order not found!")
                        .ephemeral(true),
                )
                .await?;
            }
            Err(Error::InvalidTransition { from, .. }) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!(
                            "❌ Order is already {from}. Can only confirm payment for pending orders."
                        ))
                        .ephemeral(true),
                )
                .await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Updates the status of an order (admin only).
    ///
    /// The default policy only allows forward transitions and cancellation;
    /// the `allow_status_override` setting lifts that restriction.
    #[poise::command(slash_command, prefix_command)]
    pub async fn update_order_status(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Order number (e.g., ORD-001)"] order_number: String,
        #[description = "New status for the order"] status: StatusChoice,
        #[description = "Optional notes about the status change"] notes: Option<String>,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let data = ctx.data();
        let order_number = order_number.trim().to_uppercase();
        let admin = ctx.author().display_name().to_string();

        let result = order::update_status(
            &data.database,
            &order_number,
            status.into(),
            &admin,
            notes.clone(),
            data.settings.orders.allow_status_override,
        )
        .await;

        match result {
            Ok(updated) => {
                let notification = notify::status_changed(&updated, &admin, notes.as_deref());
                let delivered = deliver_notification(&ctx, &notification).await;
                let suffix = if delivered {
                    "User has been notified."
                } else {
                    "Could not DM the user."
                };
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!(
                            "✅ Order {} status updated to {}! {suffix}",
                            updated.order_number, updated.status
                        ))
                        .ephemeral(true),
                )
                .await?;
            }
            Err(Error::OrderNotFound { .. }) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content("❌ Order not found!")
                        .ephemeral(true),
                )
                .await?;
            }
            Err(Error::InvalidTransition { from, to }) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!("❌ Cannot change order status from {from} to {to}."))
                        .ephemeral(true),
                )
                .await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Lists orders, optionally filtered by status (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn view_orders(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Filter by status (optional)"] status: Option<StatusChoice>,
        #[description = "Number of orders to show (default: 10)"] limit: Option<u64>,
    ) -> Result<()> {
        const MAX_SHOWN: u64 = 25;

        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let data = ctx.data();
        let filter = order::OrderFilter {
            status: status.map(Into::into),
            payment_method: None,
            limit: Some(limit.unwrap_or(10).min(MAX_SHOWN)),
        };
        let orders = order::list_orders(&data.database, &filter).await?;

        if orders.is_empty() {
            let embed = serenity::CreateEmbed::new()
                .title("📦 Orders")
                .description("No orders found matching your criteria.")
                .colour(serenity::Colour::BLUE);
            ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
                .await?;
            return Ok(());
        }

        let description = match filter.status {
            Some(wanted) => format!("Showing {} order(s) with status: {wanted}", orders.len()),
            None => format!("Showing {} order(s)", orders.len()),
        };
        let mut embed = serenity::CreateEmbed::new()
            .title("📦 Orders Management")
            .description(description)
            .colour(serenity::Colour::BLUE);

        for entry in &orders {
            embed = embed.field(
                format!("{} - {}", entry.order_number, entry.username),
                format!(
                    "Product: {}\nQty: {}\nStatus: {} {}\nCreated: <t:{}:R>",
                    entry.product_name,
                    entry.quantity,
                    emoji_for(&entry.status),
                    entry.status,
                    entry.created_at.timestamp()
                ),
                true,
            );
        }

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Searches orders by order number, customer name, or product (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn search_orders(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Search term (order number, username, or product name)"] query: String,
    ) -> Result<()> {
        const SEARCH_LIMIT: u64 = 15;

        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let data = ctx.data();
        let orders = order::search_orders(&data.database, &query, Some(SEARCH_LIMIT)).await?;

        if orders.is_empty() {
            let embed = serenity::CreateEmbed::new()
                .title("🔍 Search Results")
                .description(format!("No orders found matching '{query}'."))
                .colour(serenity::Colour::BLUE);
            ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
                .await?;
            return Ok(());
        }

        let mut embed = serenity::CreateEmbed::new()
            .title("🔍 Search Results")
            .description(format!(
                "Found {} order(s) matching '{query}'",
                orders.len()
            ))
            .colour(serenity::Colour::BLUE);

        for entry in &orders {
            embed = embed.field(
                format!("{} - {}", entry.order_number, entry.username),
                format!(
                    "Product: {}\nQty: {}\nStatus: {} {}\nCreated: <t:{}:R>",
                    entry.product_name,
                    entry.quantity,
                    emoji_for(&entry.status),
                    entry.status,
                    entry.created_at.timestamp()
                ),
                true,
            );
        }

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Shows order statistics (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn order_report(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let data = ctx.data();
        let overall = report::summary(&data.database, None).await?;
        let last_week = report::summary(&data.database, Some(Duration::days(7))).await?;

        let mut embed = serenity::CreateEmbed::new()
            .title("📊 Order Statistics Report")
            .description("Complete overview of all orders")
            .colour(serenity::Colour::GOLD)
            .field("Total Orders", overall.total_orders.to_string(), true)
            .field(
                "Recent Orders (7 days)",
                last_week.total_orders.to_string(),
                true,
            )
            .field("Total Quantity", overall.total_quantity.to_string(), true);

        let status_text: String = overall
            .breakdown
            .iter()
            .map(|(status, count)| format!("{} {status}: {count}\n", status_emoji(*status)))
            .collect();
        embed = embed.field(
            "📋 Orders by Status",
            if status_text.is_empty() {
                "No orders yet".to_string()
            } else {
                status_text
            },
            false,
        );

        if !overall.recent.is_empty() {
            let recent_text: String = overall
                .recent
                .iter()
                .map(|entry| {
                    format!(
                        "• {} - {} ({} x{})\n",
                        entry.order_number, entry.username, entry.product_name, entry.quantity
                    )
                })
                .collect();
            embed = embed.field("🕓 Latest Orders", recent_text, false);
        }

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
