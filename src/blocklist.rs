//! Blocklist management module
//!
//! Handles loading and querying the weak-password blocklist.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Weak substrings that mark a password as trivially guessable no matter
/// what else it contains. Matched case-insensitively, anywhere in the
/// password. Fixed at compile time; the loaded blocklist file only adds
/// exact-match entries, never patterns.
pub const WEAK_PATTERNS: [&str; 6] = ["qwerty", "12345", "password", "abc123", "letmein", "welcome"];

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Set of known weak passwords, loaded once and queried read-only.
///
/// Entries are stored lowercase; all queries are case-insensitive.
/// The caller owns the blocklist and passes it by reference into each
/// evaluation, so concurrent evaluations need no coordination.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    entries: HashSet<String>,
}

impl Blocklist {
    /// Returns a blocklist with no exact-match entries.
    ///
    /// The fixed [`WEAK_PATTERNS`] still apply to queries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the blocklist file path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_BLOCKLIST_PATH`
    /// 2. Default path `./assets/common-passwords.txt`
    pub fn default_path() -> PathBuf {
        std::env::var("PWD_BLOCKLIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
    }

    /// Loads the blocklist from the path returned by [`Blocklist::default_path`].
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist or cannot be read.
    pub fn from_default_path() -> Result<Self, BlocklistError> {
        Self::from_path(Self::default_path())
    }

    /// Loads the blocklist from a newline-delimited file.
    ///
    /// Lines are trimmed and lowercased; blank lines are dropped. An empty
    /// file yields an empty blocklist, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist load FAILED: file not found {:?}", path);
            return Err(BlocklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blocklist = Self::from_lines(&content);

        #[cfg(feature = "tracing")]
        {
            if blocklist.is_empty() {
                tracing::warn!("Blocklist file {:?} contained no entries", path);
            } else {
                tracing::info!("Blocklist loaded: {} entries from {:?}", blocklist.len(), path);
            }
        }

        Ok(blocklist)
    }

    /// Builds a blocklist from newline-delimited text already in memory.
    pub fn from_lines(content: &str) -> Self {
        content.lines().collect()
    }

    /// Number of exact-match entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no exact-match entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether a password is trivially guessable.
    ///
    /// Returns `true` if the lowercased password is an exact member of the
    /// loaded set, or contains any of the fixed [`WEAK_PATTERNS`] as a
    /// substring. Comparison is case-insensitive; the caller's original
    /// casing is untouched.
    pub fn is_blocklisted(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        if self.entries.contains(&lowered) {
            return true;
        }
        WEAK_PATTERNS.iter().any(|&pattern| lowered.contains(pattern))
    }
}

impl<S: Into<String>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|s| s.into().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { entries }
    }
}
