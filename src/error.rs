use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the program before or during play.
///
/// Gameplay itself never fails; collisions and a full grid are state
/// transitions, not errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read settings file {}: {source}", .path.display())]
    SettingsRead { path: PathBuf, source: io::Error },

    #[error("malformed settings file {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error(
        "terminal is {columns}x{rows} but the board needs at least {needed_columns}x{needed_rows}"
    )]
    TerminalTooSmall {
        columns: u16,
        rows: u16,
        needed_columns: u16,
        needed_rows: u16,
    },
}
