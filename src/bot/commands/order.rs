//! Customer-facing order commands - `place_order`, `my_orders`, and
//! `order_status`.
//!
//! These commands call into `crate::core::order` and format the structured
//! results as Discord embeds. Validation failures come back as typed errors
//! and are rendered as ephemeral error messages.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        bot::commands::{emoji_for, is_admin_or_mod, notification_embed},
        core::{notify, order},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Places a new order.
    ///
    /// Validates the product name and quantity against the configured
    /// bounds, creates the order in Pending status, and replies with a
    /// confirmation embed carrying the assigned order number.
    #[poise::command(slash_command, prefix_command)]
    pub async fn place_order(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the product you want to order"] product_name: String,
        #[description = "Quantity of the product (must be positive)"] quantity: i32,
        #[description = "Payment method (defaults to the configured one)"] payment_method: Option<
            String,
        >,
    ) -> Result<()> {
        let data = ctx.data();

        let result = order::create_order(
            &data.database,
            &data.settings.orders,
            ctx.author().id.to_string(),
            ctx.author().display_name().to_string(),
            product_name,
            quantity,
            payment_method,
        )
        .await;

        let created = match result {
            Ok(created) => created,
            Err(Error::Validation { message }) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!("❌ {message}"))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut embed = notification_embed(&notify::order_placed(&created));
        embed = embed.field(
            "📋 Next Steps",
            format!(
                "1. Make payment via {}\n\
                 2. Wait for an admin to confirm payment\n\
                 3. Your order will be processed",
                created.payment_method
            ),
            false,
        );
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Order ID: {} | Use /my_orders to track your orders",
            created.order_number
        )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the author's orders, most recent first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn my_orders(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        const SHOWN: usize = 5;

        let data = ctx.data();
        let orders =
            order::get_orders_for_user(&data.database, &ctx.author().id.to_string()).await?;

        if orders.is_empty() {
            let embed = serenity::CreateEmbed::new()
                .title("📦 Your Orders")
                .description("You haven't placed any orders yet.")
                .colour(serenity::Colour::BLUE)
                .field(
                    "Get Started",
                    "Use `/place_order` to place your first order!",
                    false,
                );
            ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
                .await?;
            return Ok(());
        }

        let mut embed = serenity::CreateEmbed::new()
            .title("📦 Your Orders")
            .description(format!("You have {} order(s)", orders.len()))
            .colour(serenity::Colour::BLUE);

        for entry in orders.iter().take(SHOWN) {
            embed = embed.field(
                format!("{} - {}", entry.order_number, entry.product_name),
                format!(
                    "Status: {} {}\nQuantity: {}\nCreated: <t:{}:R>",
                    emoji_for(&entry.status),
                    entry.status,
                    entry.quantity,
                    entry.created_at.timestamp()
                ),
                true,
            );
        }

        if orders.len() > SHOWN {
            embed = embed.field(
                "📋 More Orders",
                format!(
                    "Showing {SHOWN} of {} orders. Use `/order_status` to check specific orders.",
                    orders.len()
                ),
                false,
            );
        }

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Shows the details and recent history of a specific order.
    ///
    /// Customers can only inspect their own orders; admins can inspect any.
    #[poise::command(slash_command, prefix_command)]
    pub async fn order_status(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Order number (e.g., ORD-001)"] order_number: String,
    ) -> Result<()> {
        let data = ctx.data();
        let order_number = order_number.trim().to_uppercase();

        let Some(found) = order::get_order(&data.database, &order_number).await? else {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ Order not found! Please check the order number.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        };

        if found.user_id != ctx.author().id.to_string() && !is_admin_or_mod(&ctx).await {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ You can only view your own orders!")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        let history = order::get_order_history(&data.database, &order_number).await?;

        let mut embed = serenity::CreateEmbed::new()
            .title(format!("📋 Order Details - {}", found.order_number))
            .colour(serenity::Colour::BLUE)
            .field("Product", found.product_name.clone(), true)
            .field("Quantity", found.quantity.to_string(), true)
            .field(
                "Status",
                format!("{} {}", emoji_for(&found.status), found.status),
                true,
            )
            .field("Customer", found.username.clone(), true)
            .field("Payment Method", found.payment_method.clone(), true)
            .field(
                "Created",
                format!("<t:{}:R>", found.created_at.timestamp()),
                true,
            );

        if let Some(confirmed_by) = &found.confirmed_by {
            embed = embed.field("Confirmed By", confirmed_by.clone(), true);
        }
        if let Some(notes) = &found.notes {
            embed = embed.field("Notes", notes.clone(), false);
        }

        if !history.is_empty() {
            // Show the last few changes, most recent first
            let history_text: String = history
                .iter()
                .rev()
                .take(3)
                .map(|entry| {
                    format!(
                        "• {} → {} by {} <t:{}:R>\n",
                        entry.status_from.as_deref().unwrap_or("None"),
                        entry.status_to,
                        entry.changed_by,
                        entry.changed_at.timestamp()
                    )
                })
                .collect();
            embed = embed.field("📈 Recent History", history_text, false);
        }

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
