//! Compiled patterns for the four extraction passes

use regex::Regex;
use std::sync::LazyLock;

/// `Starting download: "<title>"`
pub(crate) static STREAM_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Starting download: "(.*?)""#).unwrap());

/// Quoted stream or YouTube URL
pub(crate) static STREAM_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(https?://(?:stream\.pwjarvis\.app|(?:www\.)?youtube\.com|youtu\.be)[^"]+)""#,
    )
    .unwrap()
});

/// Embed URL the downloader could not resolve to a video id
pub(crate) static EMBED_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Video ID not found in URL: (https?://(?:www\.)?youtube\.com/embed/[^\s"]+)"#)
        .unwrap()
});

/// Any URL ending in `.pdf`, stopping at whitespace or quotes
pub(crate) static PDF_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(https?://[^\s"']+\.(?i:pdf))"#).unwrap());

/// Media extension left on a stream title
pub(crate) static MEDIA_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:mp4|m3u8|pdf|mpd)$").unwrap());

pub(crate) static PDF_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.pdf$").unwrap());
