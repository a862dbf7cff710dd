use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "schedule-snake";
const SCORE_FILE_NAME: &str = "best_score.json";

/// Failure reading or writing the best score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("best score file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("best score file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage for the single best-score value.
pub trait ScoreStore {
    /// Returns the stored best score, `Ok(0)` when nothing was stored yet.
    fn load(&self) -> Result<u32, ScoreError>;

    /// Replaces the stored best score.
    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Returns the platform-correct data directory for this game.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

/// JSON file holding `{ "best_score": n }`.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(data_dir().join(SCORE_FILE_NAME))
    }
}

impl FileScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(ScoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.best_score)
            .map_err(|source| ScoreError::Corrupt {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        let io_error = |source| ScoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let payload = ScoreFile { best_score: score };
        let json = serde_json::to_string_pretty(&payload).map_err(|source| ScoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(io_error)
    }
}

/// Loads the best score, treating any storage failure as zero.
pub fn load_or_default(store: &dyn ScoreStore) -> u32 {
    store.load().unwrap_or_else(|error| {
        log::warn!("ignoring unreadable best score: {error}");
        0
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileScoreStore, ScoreError, ScoreStore, load_or_default};

    #[test]
    fn saved_score_is_loaded_back() {
        let path = unique_test_path("saved");
        let mut store = FileScoreStore::new(path.clone());

        store.save(42).expect("score save should succeed");

        assert_eq!(store.load().expect("load should succeed"), 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let store = FileScoreStore::new(unique_test_path("missing"));

        assert_eq!(store.load().expect("missing file should return Ok(0)"), 0);
    }

    #[test]
    fn corrupt_score_file_is_reported_and_defaults_to_zero() {
        let path = unique_test_path("corrupt");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");
        let store = FileScoreStore::new(path.clone());

        assert!(matches!(store.load(), Err(ScoreError::Corrupt { .. })));
        assert_eq!(load_or_default(&store), 0);

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("schedule-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
