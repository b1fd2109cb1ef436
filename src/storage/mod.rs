//! High score persistence
//!
//! The game core only signals "persist now"; the host calls a
//! `HighScoreStore` to durably keep the single integer across sessions.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Durable storage for the high score
///
/// One well-known key, one integer: `load` supplies the last-persisted value
/// at startup, `save` stores a new one when the core reports a terminal
/// outcome.
pub trait HighScoreStore {
    /// The last-persisted high score, or 0 if none was ever saved
    fn load(&self) -> u32;

    /// Durably store a new high score
    ///
    /// # Errors
    /// Returns an I/O error if the value cannot be written.
    fn save(&mut self, value: u32) -> io::Result<()>;
}

/// File-backed store: the integer as a line of text in a single file
///
/// A missing or garbled file reads as 0, matching a first run.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        fs::write(&self.path, format!("{value}\n"))
    }
}

/// In-memory store for tests and `--no-persist` runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: u32,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("brick_by_brick_test_{name}_{}", std::process::id()))
    }

    #[test]
    fn file_store_round_trip() {
        let path = temp_path("round_trip");
        let mut store = FileStore::new(&path);

        store.save(42).unwrap();
        assert_eq!(store.load(), 42);

        store.save(99).unwrap();
        assert_eq!(store.load(), 99);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_store_missing_file_reads_zero() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn file_store_garbled_file_reads_zero() {
        let path = temp_path("garbled");
        fs::write(&path, "not a number").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load(), 0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);
        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
    }
}
