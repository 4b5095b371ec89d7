//! Domain dataset loading.
//!
//! A dataset is line-oriented UTF-8 text with one domain per line:
//!
//! ```text
//! # Comments start with a hash
//! mailinator.com
//!
//!   Trash-Mail.com
//! ```
//!
//! Lines are trimmed, blank lines and comments are skipped, and every entry is
//! lowercased before insertion.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Blacklist compiled into the library.
pub const BUNDLED_DOMAINS: &str = include_str!("../data/domains.txt");

/// Where the domain blacklist comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DomainSource {
    /// The blacklist shipped with this crate.
    #[default]
    Bundled,
    /// A dataset file on disk.
    File(PathBuf),
    /// Dataset text held in memory.
    Text(String),
}

impl DomainSource {
    /// Creates a file source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Creates an in-memory source.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Reads and parses the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetRead`] if a file source cannot be read, or
    /// [`Error::EmptyDataset`] if the source holds no domains.
    pub fn load(&self) -> Result<ParsedDataset> {
        let parsed = match self {
            Self::Bundled => parse_domains(BUNDLED_DOMAINS),
            Self::Text(text) => parse_domains(text),
            Self::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "Cannot read domain dataset");
                    Error::dataset_read(path.clone(), e)
                })?;
                parse_domains(&text)
            }
        };

        if parsed.domains.is_empty() {
            warn!(source = %self, "Domain dataset has no entries");
            return Err(Error::EmptyDataset(self.to_string()));
        }

        debug!(
            source = %self,
            domains = parsed.domains.len(),
            comments = parsed.comment_lines,
            blank = parsed.blank_lines,
            "Loaded domain dataset"
        );
        Ok(parsed)
    }
}

impl fmt::Display for DomainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Text(_) => write!(f, "inline text"),
        }
    }
}

/// Result of parsing a dataset.
#[derive(Debug, Clone, Default)]
pub struct ParsedDataset {
    /// Unique lowercase domains.
    pub domains: HashSet<String>,
    /// Number of comment lines skipped.
    pub comment_lines: usize,
    /// Number of blank lines skipped.
    pub blank_lines: usize,
}

/// Parses dataset text into a set of lowercase domains.
#[must_use]
pub fn parse_domains(text: &str) -> ParsedDataset {
    let mut parsed = ParsedDataset::default();

    for line in text.lines() {
        let entry = line.trim();
        if entry.is_empty() {
            parsed.blank_lines += 1;
        } else if entry.starts_with('#') {
            parsed.comment_lines += 1;
        } else {
            parsed.domains.insert(entry.to_lowercase());
        }
    }

    parsed
}
