use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR_NAME: &str = "serpent";
const SCORE_FILE_NAME: &str = "highscore";

/// Failure while reading or writing the high-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file does not contain a decimal number: {0}")]
    Malformed(#[from] ParseIntError),
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score.
///
/// A missing, unreadable or malformed file yields 0: high-score tracking
/// is a convenience and never fails the program.
#[must_use]
pub fn load_high_score() -> u32 {
    load_high_score_from_path(&scores_path()).unwrap_or(0)
}

/// Saves the high score as a plain decimal, creating parent directories
/// when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreError> {
    save_high_score_to_path(&scores_path(), score)
}

fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error.into()),
    };

    Ok(raw.trim().parse::<u32>()?)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, format!("{score}\n"))?;
    Ok(())
}
