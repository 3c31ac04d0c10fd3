//! Constants used throughout the telegram bot

/// Largest document the Bot API lets us download (20 MB)
pub const MAX_UPLOAD_SIZE: u32 = 20 * 1024 * 1024;

/// Extension an uploaded log must carry
pub const INPUT_EXTENSION: &str = ".sh";

/// Extension of the returned link list
pub const OUTPUT_EXTENSION: &str = ".txt";

/// Emoji constants for consistent UI
pub mod emoji {
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "❌";
}

/// Fixed replies
pub mod messages {
    pub const START: &str = "📂 Send me a .sh file, I'll extract video & PDF links into a .txt file.";
    pub const WRONG_EXTENSION: &str = "⚠ Please send a .sh file only.";
    pub const PROCESSING_FAILED: &str = "Could not process the file, please try again.";
}
