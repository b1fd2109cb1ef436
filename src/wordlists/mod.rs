//! Word pools for the guessing game
//!
//! Provides the embedded per-difficulty pools compiled into the binary, a
//! loader for custom pool files, and `PoolSet`, the word-pool provider handed
//! to the game core.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::{Difficulty, WordEntry, WordPool};
use loader::entries_from_pairs;

/// One pool of word entries per difficulty tier
///
/// Implements the provider contract: every tier's pool is non-empty and
/// already validated.
pub struct PoolSet {
    easy: Vec<WordEntry>,
    medium: Vec<WordEntry>,
    hard: Vec<WordEntry>,
}

impl PoolSet {
    /// The pools compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            easy: entries_from_pairs(EASY),
            medium: entries_from_pairs(MEDIUM),
            hard: entries_from_pairs(HARD),
        }
    }

    /// Use one custom pool for every difficulty tier
    ///
    /// Scoring still follows the chosen tier; only word selection changes.
    #[must_use]
    pub fn uniform(entries: Vec<WordEntry>) -> Self {
        Self {
            easy: entries.clone(),
            medium: entries.clone(),
            hard: entries,
        }
    }
}

impl WordPool for PoolSet {
    fn entries(&self, difficulty: Difficulty) -> &[WordEntry] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}
