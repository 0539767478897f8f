//! Keyword auto-responses for incoming messages.
//!
//! Watches every message the bot can see and replies with a configured
//! canned response when one of the configured keywords appears. Only the
//! first matching keyword (alphabetically) triggers a reply, and messages
//! from bots are ignored.

use crate::{
    bot::BotData,
    config::settings::ResponseSettings,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// Dispatches serenity gateway events. Only `Message` events are handled.
///
/// # Errors
/// Returns an error if sending a reply fails.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::Message { new_message } = event {
        if new_message.author.bot {
            return Ok(());
        }
        if let Some(response) = match_keyword(&data.settings.responses, &new_message.content) {
            tracing::debug!(
                "Keyword response triggered by message from {}",
                new_message.author.name
            );
            new_message.reply(ctx, response).await?;
        }
    }
    Ok(())
}

/// Finds the canned response for the first configured keyword contained in
/// `content`, honoring the case-sensitivity setting.
#[must_use]
pub fn match_keyword<'a>(settings: &'a ResponseSettings, content: &str) -> Option<&'a str> {
    let haystack = if settings.case_sensitive {
        content.to_string()
    } else {
        content.to_lowercase()
    };

    settings.keywords.iter().find_map(|(keyword, response)| {
        let needle = if settings.case_sensitive {
            keyword.clone()
        } else {
            keyword.to_lowercase()
        };
        haystack.contains(&needle).then_some(response.as_str())
    })
}
