use thiserror::Error;

use crate::config::ConfigError;
use crate::constants::{emoji, messages};
use crate::upload::{InvalidInput, UploadError};

/// Error type for telegram bot operations
#[derive(Debug, Error)]
pub enum BotError {
    /// Telegram API error
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    /// Fetching the uploaded file failed
    #[error("Download error: {0}")]
    Download(#[from] teloxide::DownloadError),
    /// Reading or writing a temporary artifact failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The upload was rejected or could not be decoded
    #[error(transparent)]
    Upload(#[from] UploadError),
    /// Bad process configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<InvalidInput> for BotError {
    fn from(err: InvalidInput) -> Self {
        BotError::Upload(UploadError::Invalid(err))
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Helper trait to convert errors into user-friendly messages
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for InvalidInput {
    fn user_message(&self) -> String {
        match self {
            InvalidInput::MissingFileName | InvalidInput::WrongExtension(_) => {
                messages::WRONG_EXTENSION.to_string()
            }
            InvalidInput::TooLarge { .. } => format!("{} {}", emoji::WARNING, self),
        }
    }
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        match self {
            BotError::Upload(UploadError::Invalid(invalid)) => invalid.user_message(),
            BotError::Upload(UploadError::Decode(_)) => {
                format!("{} The file is not valid UTF-8 text.", emoji::ERROR)
            }
            _ => format!("{} {}", emoji::ERROR, messages::PROCESSING_FAILED),
        }
    }
}
