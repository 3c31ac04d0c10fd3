pub mod artifact;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod telegram;
pub mod types;
pub mod upload;
pub mod utils;

pub use config::{Config, ConfigError, Mode};
pub use error::{BotError, BotResult, UserMessage};
pub use types::{Command, HandlerResult, UploadSettings};
