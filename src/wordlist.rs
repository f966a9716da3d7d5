//! Word list loading
//!
//! Word lists are plain text, one word per line. Surrounding whitespace is
//! trimmed and blank lines are ignored.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    /// Failed to read the word list file
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The word list has no words
    #[error("Word list is empty")]
    Empty,
}

/// Read a word list from disk
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_list(&contents)
}

/// Split word list text into words
pub fn parse_word_list(contents: &str) -> Result<Vec<String>, WordListError> {
    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

/// Field exponent `k` for a word list of `len` words, if `len` is a power of two
pub fn infer_field_exponent(len: usize) -> Option<u32> {
    if len.is_power_of_two() {
        Some(len.trailing_zeros())
    } else {
        None
    }
}
