//! Uploaded `.sh` logs: validate, download, extract, reply with a `.txt`

use crate::error::{BotResult, UserMessage};
use crate::handlers;
use crate::types::{HandlerResult, UploadSettings};
use crate::upload::{self, RawUpload};
use teloxide::{net::Download, prelude::*, types::Document};

/// Handle a document upload
pub async fn handle_document(bot: Bot, msg: Message, settings: UploadSettings) -> HandlerResult {
    let Some(document) = msg.document().cloned() else {
        return Ok(());
    };

    // Reject before downloading anything
    let checked = upload::validate_file_name(document.file_name.as_deref())
        .map(|_| ())
        .and_then(|_| upload::check_size(document.file.size));
    if let Err(invalid) = checked {
        tracing::warn!("Rejected upload in chat {}: {}", msg.chat.id.0, invalid);
        bot.send_message(msg.chat.id, invalid.user_message()).await?;
        return Ok(());
    }

    tracing::info!(
        "Received log: {} ({} bytes)",
        document.file_name.as_deref().unwrap_or("unknown"),
        document.file.size
    );

    if let Err(err) = process_document(&bot, &msg, &document, &settings).await {
        tracing::error!("Failed to process upload in chat {}: {}", msg.chat.id.0, err);
        bot.send_message(msg.chat.id, err.user_message()).await?;
    }

    Ok(())
}

async fn process_document(
    bot: &Bot,
    msg: &Message,
    document: &Document,
    settings: &UploadSettings,
) -> BotResult<()> {
    let file = bot.get_file(&document.file.id).await?;

    let mut content = Vec::new();
    bot.download_file(&file.path, &mut content).await?;

    let processed = upload::process_upload(
        RawUpload {
            file_name: document.file_name.clone(),
            content,
        },
        &settings.extractor,
    )?;

    handlers::send_output(bot, msg, &settings.work_dir, processed).await
}
