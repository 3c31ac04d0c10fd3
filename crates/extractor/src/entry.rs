//! Title/link pairs and the text document they are rendered into

use std::fmt;

/// One line of the output: a title and the link it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub title: String,
    pub link: String,
}

impl ExtractedEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

impl fmt::Display for ExtractedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.title, self.link)
    }
}

/// Ordered entries produced for one uploaded log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    entries: Vec<ExtractedEntry>,
}

impl OutputDocument {
    pub fn new(entries: Vec<ExtractedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ExtractedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `title : link` lines, each terminated by a newline
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.render().into_bytes()
    }
}

impl From<Vec<ExtractedEntry>> for OutputDocument {
    fn from(entries: Vec<ExtractedEntry>) -> Self {
        Self::new(entries)
    }
}

impl IntoIterator for OutputDocument {
    type Item = ExtractedEntry;
    type IntoIter = std::vec::IntoIter<ExtractedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OutputDocument {
    type Item = &'a ExtractedEntry;
    type IntoIter = std::slice::Iter<'a, ExtractedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
