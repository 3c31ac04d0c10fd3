use crate::commands;
use crate::types::Command;
use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

/// Register bot commands in Telegram menu
pub async fn set_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(commands::start));

    let document_handler = Message::filter_document().endpoint(commands::handle_document);

    Update::filter_message()
        .branch(command_handler)
        .branch(document_handler)
        .branch(dptree::endpoint(commands::ignore))
}
