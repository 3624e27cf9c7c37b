//! Score persistence behind a key-value seam.
//!
//! Scores live in an external string key-value store as three named
//! integer records. Reads are lenient: an absent or unparsable record
//! counts as zero, so a missing or damaged store never blocks a session.

use crate::scoreboard::ScoreBoard;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Record key for the first player's score.
pub const FIRST_PLAYER_SCORE_KEY: &str = "first_player_score";
/// Record key for the second player's score.
pub const SECOND_PLAYER_SCORE_KEY: &str = "second_player_score";
/// Record key for the draw counter.
pub const DRAW_SCORE_KEY: &str = "draw_score";

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}

/// A string key-value store holding the score records.
pub trait ScoreStore {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing medium rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a JSON object of string records, written through on
/// every update.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing records. A missing file
    /// starts empty; an unreadable one is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when an existing file cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Score file is not valid JSON, starting fresh");
                    HashMap::new()
                }
            }
        } else {
            debug!("No score file yet");
            HashMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Translates [`ScoreBoard`] state to and from a [`ScoreStore`].
#[derive(Debug)]
pub struct ScoreStorage<S> {
    store: S,
}

impl<S: ScoreStore> ScoreStorage<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes the current totals to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when any record cannot be written.
    #[instrument(skip_all)]
    pub fn save_scores(&mut self, score_board: &ScoreBoard) -> Result<(), StoreError> {
        let scores = score_board.scores();
        self.store
            .write(FIRST_PLAYER_SCORE_KEY, &scores.first_player_score.to_string())?;
        self.store
            .write(SECOND_PLAYER_SCORE_KEY, &scores.second_player_score.to_string())?;
        self.store
            .write(DRAW_SCORE_KEY, &scores.draw_score.to_string())?;
        debug!(?scores, "Scores saved");
        Ok(())
    }

    /// Restores totals from the store into the score board. Absent or
    /// unparsable records count as zero.
    #[instrument(skip_all)]
    pub fn sync_scores(&self, score_board: &mut ScoreBoard) {
        let first = parse_score(self.store.read(FIRST_PLAYER_SCORE_KEY));
        let second = parse_score(self.store.read(SECOND_PLAYER_SCORE_KEY));
        let draws = parse_score(self.store.read(DRAW_SCORE_KEY));

        score_board.set_scores(first, second, draws);
        info!(first, second, draws, "Scores restored from store");
    }

    /// Zeroes the score board and persists the zeros.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the zeros cannot be written.
    #[instrument(skip_all)]
    pub fn reset_scores(&mut self, score_board: &mut ScoreBoard) -> Result<(), StoreError> {
        score_board.reset_scores();
        self.save_scores(score_board)
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn parse_score(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}
