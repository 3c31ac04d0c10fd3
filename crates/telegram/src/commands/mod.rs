//! Handlers for the Telegram bot
//!
//! - `basic`: the /start greeting
//! - `document`: uploaded download logs

mod basic;
mod document;

pub use basic::*;
pub use document::*;
