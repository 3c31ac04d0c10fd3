//! Download-log link extractor
//!
//! Scans the text log written by the download manager and pulls out video
//! and PDF links together with a human readable title for each. Everything
//! in this crate is pure: no filesystem, no network, no async.

pub mod entry;
pub mod extract;
mod patterns;
pub mod title;

pub use entry::{ExtractedEntry, OutputDocument};
pub use extract::{
    extract, scan, Extraction, LinkExtractor, Located, PairingMode, UnknownPairingMode, EMBED_TITLE,
};
pub use title::{clean_stream_title, pdf_title};
