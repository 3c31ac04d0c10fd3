//! Helpers shared by the handlers for replying to the user

use std::path::{Path, PathBuf};

use crate::artifact::TempArtifact;
use crate::error::BotResult;
use crate::upload::Processed;
use crate::utils::sanitize_file_name;
use teloxide::{prelude::*, types::InputFile};

/// Path of the temporary output file for one request
///
/// Chat and message ids keep concurrent uploads with the same name apart.
pub fn artifact_path(work_dir: &Path, chat_id: ChatId, message_id: i32, output_name: &str) -> PathBuf {
    work_dir.join(format!(
        "{}_{}_{}",
        chat_id.0,
        message_id,
        sanitize_file_name(output_name)
    ))
}

/// Write the link list to a temporary file and send it as a reply
///
/// The temporary file is removed whether or not sending succeeds.
pub async fn send_output(bot: &Bot, msg: &Message, work_dir: &Path, processed: Processed) -> BotResult<()> {
    let Processed {
        output_name,
        document,
    } = processed;

    let path = artifact_path(work_dir, msg.chat.id, msg.id.0, &output_name);
    let artifact = TempArtifact::write(path, document.into_bytes()).await?;

    bot.send_document(
        msg.chat.id,
        InputFile::file(artifact.path().to_path_buf()).file_name(output_name.clone()),
    )
    .reply_to_message_id(msg.id)
    .await?;

    if let Err(e) = artifact.remove().await {
        tracing::warn!("Failed to remove temporary file for {}: {}", output_name, e);
    }

    tracing::info!("Sent {} to chat {}", output_name, msg.chat.id.0);
    Ok(())
}
