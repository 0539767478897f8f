//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Admin-only order management commands
pub mod admin;

/// General utility commands
pub mod general;

/// Customer-facing order commands
pub mod order;

// Export commands
pub use admin::*;
pub use general::*;
pub use order::*;

use crate::{
    bot::Context,
    core::notify::{Notification, Severity},
    core::status::OrderStatus,
};
use poise::serenity_prelude as serenity;

/// Emoji shown next to each order status in listings and embeds.
pub(crate) const fn status_emoji(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "🟡",
        OrderStatus::Paid => "🟢",
        OrderStatus::Processing => "🔄",
        OrderStatus::Completed => "✅",
        OrderStatus::Cancelled => "❌",
    }
}

/// Emoji for a stored status string; unknown values get a neutral marker.
pub(crate) fn emoji_for(status: &str) -> &'static str {
    OrderStatus::parse(status).map_or("⚪", status_emoji)
}

const fn severity_colour(severity: Severity) -> serenity::Colour {
    match severity {
        Severity::Info => serenity::Colour::BLUE,
        Severity::Success => serenity::Colour::DARK_GREEN,
        Severity::Warning => serenity::Colour::RED,
    }
}

/// Renders a core notification payload as a Discord embed.
pub(crate) fn notification_embed(notification: &Notification) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(notification.title.clone())
        .description(notification.description.clone())
        .colour(severity_colour(notification.severity));
    for (name, value) in &notification.fields {
        let inline = name != "Next Steps" && name != "Notes";
        embed = embed.field(name.clone(), value.clone(), inline);
    }
    embed
}

/// Attempts to DM the notification's recipient. Delivery failure is a
/// non-fatal warning; the caller's state change is already committed.
pub(crate) async fn deliver_notification(ctx: &Context<'_>, notification: &Notification) -> bool {
    let Ok(raw_id) = notification.recipient_id.parse::<u64>() else {
        tracing::warn!(
            "Cannot deliver notification: invalid recipient id '{}'",
            notification.recipient_id
        );
        return false;
    };

    let embed = notification_embed(notification);
    let delivery = async {
        let channel = serenity::UserId::new(raw_id)
            .create_dm_channel(ctx.serenity_context())
            .await?;
        channel
            .id
            .send_message(
                ctx.serenity_context(),
                serenity::CreateMessage::new().embed(embed),
            )
            .await?;
        Ok::<(), serenity::Error>(())
    };

    match delivery.await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "Could not notify user {}: {e}",
                notification.recipient_id
            );
            false
        }
    }
}

/// Whether the command author holds one of the configured admin roles.
/// Permission checks live entirely in this layer; the core never sees them.
pub(crate) async fn is_admin_or_mod(ctx: &Context<'_>) -> bool {
    let Some(member) = ctx.author_member().await else {
        return false;
    };
    let role_ids = member.roles.clone();

    let Some(guild) = ctx.guild() else {
        return false;
    };
    role_ids.iter().any(|role_id| {
        guild
            .roles
            .get(role_id)
            .is_some_and(|role| ctx.data().settings.access.is_admin_role(&role.name))
    })
}

/// Replies with a permission error unless the author is an admin.
/// Returns whether the caller may proceed.
pub(crate) async fn ensure_admin(ctx: &Context<'_>) -> crate::errors::Result<bool> {
    if is_admin_or_mod(ctx).await {
        return Ok(true);
    }
    ctx.send(
        poise::CreateReply::default()
            .content("❌ You don't have permission to use this command!")
            .ephemeral(true),
    )
    .await?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_emoji_mapping() {
        assert_eq!(status_emoji(OrderStatus::Pending), "🟡");
        assert_eq!(status_emoji(OrderStatus::Completed), "✅");
        assert_eq!(emoji_for("Paid"), "🟢");
        assert_eq!(emoji_for("NotAStatus"), "⚪");
    }
}
