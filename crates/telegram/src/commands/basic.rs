//! Basic bot commands

use crate::constants::messages;
use crate::types::HandlerResult;
use teloxide::prelude::*;

/// Explain what to send
pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, messages::START).await?;
    Ok(())
}

/// Ignore anything that is neither a command nor a document
pub async fn ignore(msg: Message) -> HandlerResult {
    tracing::debug!("Ignoring message {} in chat {}", msg.id.0, msg.chat.id.0);
    Ok(())
}
