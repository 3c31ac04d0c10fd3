//! The four extraction passes and the strategies for pairing their output
//!
//! Passes run in a fixed order over the whole log:
//! 1. titles from `Starting download: "..."` lines
//! 2. quoted stream/YouTube links
//! 3. embed URLs reported as `Video ID not found in URL: ...`
//! 4. PDF links
//!
//! Passes 3 and 4 produce complete entries. Passes 1 and 2 produce titles and
//! links separately, and [`PairingMode`] decides how they are joined.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::entry::{ExtractedEntry, OutputDocument};
use crate::patterns::{EMBED_ERROR, PDF_LINK, STREAM_LINK, STREAM_TITLE};
use crate::title::{clean_stream_title, pdf_title};

/// Title used for embed links the downloader failed to resolve
pub const EMBED_TITLE: &str = "YouTube Video";

/// How stream titles (pass 1) are matched with stream links (pass 2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingMode {
    /// Zip all titles against all links by position. Surplus on either side
    /// is dropped, and a count mismatch in passes 1/2 shifts every later
    /// entry.
    #[default]
    Positional,
    /// Pair each title with the first stream link that follows it before the
    /// next title starts.
    Proximity,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pairing mode '{0}', expected 'positional' or 'proximity'")]
pub struct UnknownPairingMode(pub String);

impl FromStr for PairingMode {
    type Err = UnknownPairingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(PairingMode::Positional),
            "proximity" => Ok(PairingMode::Proximity),
            _ => Err(UnknownPairingMode(s.to_string())),
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingMode::Positional => write!(f, "positional"),
            PairingMode::Proximity => write!(f, "proximity"),
        }
    }
}

/// A match together with the byte offset where it starts in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub offset: usize,
    pub value: T,
}

/// Raw output of the four passes, before pairing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub stream_titles: Vec<Located<String>>,
    pub stream_links: Vec<Located<String>>,
    pub embed_entries: Vec<ExtractedEntry>,
    pub pdf_entries: Vec<ExtractedEntry>,
}

/// Run all four passes over `content`
pub fn scan(content: &str) -> Extraction {
    let stream_titles: Vec<_> = STREAM_TITLE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| Located {
            offset: m.start(),
            value: clean_stream_title(m.as_str()),
        })
        .collect();

    let stream_links: Vec<_> = STREAM_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| Located {
            offset: m.start(),
            value: m.as_str().to_string(),
        })
        .collect();

    let embed_entries: Vec<_> = EMBED_ERROR
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| ExtractedEntry::new(EMBED_TITLE, m.as_str()))
        .collect();

    let pdf_entries: Vec<_> = PDF_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| ExtractedEntry::new(pdf_title(m.as_str()), m.as_str()))
        .collect();

    tracing::debug!(
        titles = stream_titles.len(),
        links = stream_links.len(),
        embeds = embed_entries.len(),
        pdfs = pdf_entries.len(),
        "Scanned download log"
    );

    Extraction {
        stream_titles,
        stream_links,
        embed_entries,
        pdf_entries,
    }
}

impl Extraction {
    /// Join the pass results into the final document
    pub fn pair(self, mode: PairingMode) -> OutputDocument {
        match mode {
            PairingMode::Positional => self.pair_positional(),
            PairingMode::Proximity => self.pair_proximity(),
        }
    }

    fn pair_positional(self) -> OutputDocument {
        let Extraction {
            stream_titles,
            stream_links,
            embed_entries,
            pdf_entries,
        } = self;

        let tail = embed_entries.iter().chain(pdf_entries.iter());

        let titles: Vec<String> = stream_titles
            .into_iter()
            .map(|t| t.value)
            .chain(tail.clone().map(|e| e.title.clone()))
            .collect();
        let links: Vec<String> = stream_links
            .into_iter()
            .map(|l| l.value)
            .chain(tail.map(|e| e.link.clone()))
            .collect();

        if titles.len() != links.len() {
            tracing::warn!(
                titles = titles.len(),
                links = links.len(),
                "Title and link counts differ, surplus entries dropped"
            );
        }

        titles
            .into_iter()
            .zip(links)
            .map(|(title, link)| ExtractedEntry::new(title, link))
            .collect::<Vec<_>>()
            .into()
    }

    fn pair_proximity(self) -> OutputDocument {
        let mut entries = Vec::with_capacity(self.stream_titles.len());
        let mut links = self.stream_links.into_iter().peekable();
        let mut titles = self.stream_titles.into_iter().peekable();

        while let Some(title) = titles.next() {
            let window_end = titles.peek().map_or(usize::MAX, |next| next.offset);

            // links before this title belong to nothing
            while links.next_if(|l| l.offset < title.offset).is_some() {}

            match links.next_if(|l| l.offset < window_end) {
                Some(link) => entries.push(ExtractedEntry::new(title.value, link.value)),
                None => tracing::debug!(title = %title.value, "No stream link follows title"),
            }
        }

        entries.extend(self.embed_entries);
        entries.extend(self.pdf_entries);
        entries.into()
    }
}

/// Extractor configured with a pairing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkExtractor {
    mode: PairingMode,
}

impl LinkExtractor {
    pub fn new(mode: PairingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    pub fn extract(&self, content: &str) -> OutputDocument {
        scan(content).pair(self.mode)
    }
}

/// Extract entries with positional pairing
pub fn extract(content: &str) -> OutputDocument {
    LinkExtractor::default().extract(content)
}
