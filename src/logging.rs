use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::score::data_dir;

const LOG_FILE_NAME: &str = "snake.log";

/// Default log location next to the best-score file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Installs a file-backed logger.
///
/// The terminal belongs to the game, so records never go to stderr. Nothing
/// is installed unless `RUST_LOG` is set or an explicit path is given.
pub fn init(explicit_path: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let env = Env::default();
    if explicit_path.is_none() && std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = explicit_path.map_or_else(default_log_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;

    Builder::from_env(env.default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|error| io::Error::other(error.to_string()))?;

    Ok(Some(path))
}

/// Like [`init`], but a logger that cannot be set up only costs the logs:
/// the failure is reported on stderr and the game keeps going.
pub fn init_or_warn(explicit_path: Option<&Path>) -> Option<PathBuf> {
    match init(explicit_path) {
        Ok(path) => path,
        Err(error) => {
            eprintln!("warning: logging disabled: {error}");
            None
        }
    }
}
