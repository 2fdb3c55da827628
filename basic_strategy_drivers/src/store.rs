use basic_strategy::StreakStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot access state file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid state file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct StoredState {
    best_streak: u32,
}

/// Keeps the best streak in a small YAML file.
#[derive(Debug, Clone)]
pub struct FileStreakStore {
    path: PathBuf,
}

impl FileStreakStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStreakStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as a best streak of 0.
    fn read(&self) -> Result<StoredState, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(StoredState::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_yaml::from_str(&content)?)
    }

    fn write(&self, state: StoredState) -> Result<(), StoreError> {
        let content = serde_yaml::to_string(&state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl StreakStore for FileStreakStore {
    fn load_best_streak(&self) -> u32 {
        match self.read() {
            Ok(state) => state.best_streak,
            Err(err) => {
                log::warn!("{}: {}, starting from 0", self.path.display(), err);
                0
            }
        }
    }

    fn save_best_streak(&mut self, best_streak: u32) {
        if let Err(err) = self.write(StoredState { best_streak }) {
            log::warn!("{}: {}, best streak not saved", self.path.display(), err);
        }
    }
}
