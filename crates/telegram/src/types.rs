use std::path::PathBuf;

use extractor::LinkExtractor;
use teloxide::macros::BotCommands;

/// Type alias for handler result types
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Show how to use the bot")]
    Start,
}

/// Per-request settings injected into the document handler
#[derive(Clone, Debug)]
pub struct UploadSettings {
    /// Extractor with the configured pairing mode
    pub extractor: LinkExtractor,
    /// Directory for temporary output files
    pub work_dir: PathBuf,
}
