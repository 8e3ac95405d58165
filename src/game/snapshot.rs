//! Round observers and JSON snapshots
//!
//! After every scored round the engine hands its full state to each observer.
//! Observers are best effort: a failing observer is recorded by the engine and the
//! game carries on.

use super::engine::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Called by the engine after each scored round
pub trait RoundObserver {
    /// # Errors
    /// Any I/O failure; the engine records it and keeps playing.
    fn on_round_scored(&mut self, state: &GameState) -> io::Result<()>;
}

/// Writes the game state as pretty JSON, replacing the previous snapshot
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a snapshot back, for inspection
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read or is not a valid snapshot.
    pub fn read(path: impl AsRef<Path>) -> io::Result<GameState> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl RoundObserver for JsonSnapshot {
    fn on_round_scored(&mut self, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
