//! Title normalisation for stream downloads and PDF links

use crate::patterns::{MEDIA_EXTENSION, PDF_EXTENSION};

/// Normalise a title captured from a `Starting download:` line
///
/// Surrounding whitespace is trimmed and one trailing media extension
/// (`mp4`, `m3u8`, `pdf`, `mpd`, any case) is removed.
pub fn clean_stream_title(raw: &str) -> String {
    MEDIA_EXTENSION.replace(raw.trim(), "").trim().to_string()
}

/// Derive a readable title from a PDF URL
///
/// Uses the last path segment, percent-decoded, with the `.pdf` suffix
/// dropped and `_`/`-` turned into spaces.
pub fn pdf_title(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    PDF_EXTENSION
        .replace(&decoded, "")
        .replace(['_', '-'], " ")
        .trim()
        .to_string()
}
