//! Save-file storage.
//!
//! One game is kept in one plain text file; saving overwrites it.

use std::io;
use std::path::{Path, PathBuf};

use conquest_engine::{GameState, LoadError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when saving or restoring a game.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no saved game found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not access the save file: {0}")]
    Io(#[from] io::Error),

    #[error("the saved game is corrupt: {0}")]
    Corrupt(#[from] LoadError),
}

/// File-backed storage for a single saved game.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a save file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes `game` to the save file, replacing any previous save.
    pub fn save(&self, game: &GameState) -> Result<(), StorageError> {
        std::fs::write(&self.path, game.to_save())?;
        info!(path = %self.path.display(), "game saved");
        Ok(())
    }

    /// Reads the saved game back.
    pub fn load(&self) -> Result<GameState, StorageError> {
        if !self.exists() {
            return Err(StorageError::NotFound(self.path.clone()));
        }
        let text = std::fs::read_to_string(&self.path)?;
        let game = GameState::from_save(&text)?;
        debug!(path = %self.path.display(), "game loaded");
        Ok(game)
    }
}
