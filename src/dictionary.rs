//! Dictionary management module
//!
//! Word lists consulted by the scorer to penalize passwords built around
//! common words. A word source is optional: when none is configured, or the
//! file behind it cannot be read, scoring simply skips the dictionary penalty.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable overriding the dictionary location.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

const DEFAULT_DICTIONARY_PATH: &str = "./assets/words.txt";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// A finite, restartable sequence of dictionary words.
///
/// Words are yielded lowercased and trimmed; every call to [`WordSource::words`]
/// starts again from the first word.
pub trait WordSource: Send + Sync {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// In-memory word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from raw lines.
    ///
    /// Lines are trimmed and lowercased; blank lines and repeated words are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self { words }
    }

    /// Reads a newline-delimited word list from disk.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so one bad line does
    /// not discard the rest of the list.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(Self::from_lines(content.lines()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Dictionary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }
}

/// File-backed dictionary, read on first use and cached afterwards.
///
/// A missing or unreadable file yields an empty dictionary instead of an error.
#[derive(Debug)]
pub struct FileDictionary {
    path: PathBuf,
    cache: OnceLock<Dictionary>,
}

impl FileDictionary {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    /// Uses the path from [`dictionary_path`].
    pub fn from_env() -> Self {
        Self::new(dictionary_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has already been read.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    fn load(&self) -> &Dictionary {
        self.cache.get_or_init(|| match Dictionary::from_path(&self.path) {
            Ok(dictionary) => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    "Dictionary loaded: {} words from {}",
                    dictionary.len(),
                    self.path.display()
                );
                dictionary
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Dictionary unavailable, skipping penalty: {}", _e);
                Dictionary::default()
            }
        })
    }
}

impl WordSource for FileDictionary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.load().words()
    }
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/words.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var(DICTIONARY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}
