//! Deny-list of common passwords
//!
//! Holds the tokens checked by the `common` rule, either the embedded list or
//! one loaded from an external file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Common English and Polish passwords rejected out of the box.
const EMBEDDED: &[&str] = &[
    "password", "hasło", "12345678", "123456789", "qwerty", "abc123",
    "password123", "admin", "letmein", "welcome", "monkey", "dragon",
    "123123", "password1", "admin123", "root", "toor", "pass",
    "test", "guest", "info", "adm", "admin1", "password12",
    "pass123", "12345", "1234", "123456", "654321", "superman",
    "qwerty123", "football", "baseball", "welcome123",
];

#[derive(Error, Debug)]
pub enum DenyListError {
    #[error("Deny-list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read deny-list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Deny-list file is empty")]
    EmptyFile,
}

/// Lower-cased tokens, deduplicated, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    entries: Vec<String>,
}

impl DenyList {
    /// Returns the built-in list.
    pub fn embedded() -> Self {
        Self::from_entries(EMBEDDED.iter().copied())
    }

    /// Builds a list from arbitrary tokens.
    ///
    /// Tokens are trimmed and lower-cased; blank tokens and duplicates are
    /// dropped. A blank token would match every candidate.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for entry in entries {
            let token = entry.as_ref().trim().to_lowercase();
            if !token.is_empty() && !out.contains(&token) {
                out.push(token);
            }
        }
        Self { entries: out }
    }

    /// Loads a list from a file with one token per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenyListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list loading FAILED: FileNotFound {:?}", path);
            return Err(DenyListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list loading FAILED: Empty file {:?}", path);
            return Err(DenyListError::EmptyFile);
        }

        let list = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Deny-list loaded: {} tokens from {:?}", list.len(), path);

        Ok(list)
    }

    /// Returns `true` if the candidate equals or contains any token,
    /// ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        self.entries.iter().any(|token| lowered.contains(token.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for DenyList {
    fn default() -> Self {
        Self::embedded()
    }
}
