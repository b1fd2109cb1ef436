//! Word pool loading utilities
//!
//! Provides functions to load word pools from files or from the embedded
//! constants.

use crate::core::{TargetWord, WordEntry};
use std::fs;
use std::io;
use std::path::Path;

/// Load word entries from a pool file
///
/// Each line is `WORD` or `WORD: clue text`. Blank lines and lines whose word
/// fails validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use brick_by_brick::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;

    let entries = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let (word, clue) = match trimmed.split_once(':') {
                Some((word, clue)) => (word.trim(), Some(clue.trim().to_string())),
                None => (trimmed, None),
            };
            TargetWord::new(word)
                .ok()
                .map(|target| WordEntry::new(target, clue))
        })
        .collect();

    Ok(entries)
}

/// Convert embedded `(word, clue)` pairs to a `WordEntry` vector
///
/// # Examples
/// ```
/// use brick_by_brick::wordlists::loader::entries_from_pairs;
/// use brick_by_brick::wordlists::EASY;
///
/// let entries = entries_from_pairs(EASY);
/// assert_eq!(entries.len(), EASY.len());
/// ```
#[must_use]
pub fn entries_from_pairs(pairs: &[(&str, Option<&str>)]) -> Vec<WordEntry> {
    pairs
        .iter()
        .filter_map(|&(word, clue)| {
            TargetWord::new(word)
                .ok()
                .map(|target| WordEntry::new(target, clue.map(str::to_string)))
        })
        .collect()
}
