use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::{
    CHROME_COLUMNS, CHROME_ROWS, DEFAULT_TICKS_PER_SECOND, GridSize, MIN_EXPLICIT_GRID,
    MIN_GRID_HEIGHT, MIN_GRID_WIDTH, Mode, TEXT_GRID, TICKS_PER_SECOND_RANGE,
};
use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional values read from the settings file or the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    pub mode: Option<Mode>,
    pub ticks_per_second: Option<u32>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub seed: Option<u64>,
}

impl SettingsLayer {
    /// Values from `other` win where present.
    #[must_use]
    pub fn overlaid_with(self, other: Self) -> Self {
        Self {
            mode: other.mode.or(self.mode),
            ticks_per_second: other.ticks_per_second.or(self.ticks_per_second),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            seed: other.seed.or(self.seed),
        }
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
    pub mode: Mode,
    pub ticks_per_second: u32,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Applies defaults to `layer` and validates the result.
    pub fn resolve(layer: SettingsLayer) -> Result<Self, AppError> {
        let ticks_per_second = layer.ticks_per_second.unwrap_or(DEFAULT_TICKS_PER_SECOND);
        if !TICKS_PER_SECOND_RANGE.contains(&ticks_per_second) {
            return Err(AppError::InvalidSettings(format!(
                "ticks_per_second must be within {}..={}, got {ticks_per_second}",
                TICKS_PER_SECOND_RANGE.start(),
                TICKS_PER_SECOND_RANGE.end(),
            )));
        }

        for (name, value) in [("width", layer.width), ("height", layer.height)] {
            if let Some(value) = value.filter(|value| *value < MIN_EXPLICIT_GRID) {
                return Err(AppError::InvalidSettings(format!(
                    "{name} must be at least {MIN_EXPLICIT_GRID}, got {value}"
                )));
            }
        }

        Ok(Self {
            mode: layer.mode.unwrap_or(Mode::Blocks),
            ticks_per_second,
            width: layer.width,
            height: layer.height,
            seed: layer.seed,
        })
    }

    /// Chooses the grid for a terminal of `columns` x `rows`.
    ///
    /// Blocks mode fills the terminal unless a dimension is given; text mode
    /// starts from the fixed 20x12 grid. The result must fit on screen.
    pub fn grid_for(&self, columns: u16, rows: u16) -> Result<GridSize, AppError> {
        let cell_width = self.mode.cell_width();
        let base = match self.mode {
            Mode::Blocks => GridSize::fit(
                columns.saturating_sub(CHROME_COLUMNS),
                rows.saturating_sub(CHROME_ROWS),
                cell_width,
            ),
            Mode::Text => TEXT_GRID,
        };
        let grid = GridSize {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
        };

        // Fitted blocks dimensions must reach the playable minimum.
        let fitted = self.mode == Mode::Blocks;
        let required_width = match self.width {
            None if fitted => grid.width.max(MIN_GRID_WIDTH),
            _ => grid.width,
        };
        let required_height = match self.height {
            None if fitted => grid.height.max(MIN_GRID_HEIGHT),
            _ => grid.height,
        };
        let needed_columns = required_width
            .saturating_mul(cell_width)
            .saturating_add(CHROME_COLUMNS);
        let needed_rows = required_height.saturating_add(CHROME_ROWS);

        if columns < needed_columns || rows < needed_rows {
            return Err(AppError::TerminalTooSmall {
                columns,
                rows,
                needed_columns,
                needed_rows,
            });
        }

        Ok(grid)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads the settings file.
///
/// Returns an empty layer when the file does not exist. Returns `Err` when the
/// file exists but cannot be read or parsed, so the caller can report it before
/// entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<SettingsLayer, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SettingsLayer::default()),
        Err(source) => {
            return Err(AppError::SettingsRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| AppError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}
