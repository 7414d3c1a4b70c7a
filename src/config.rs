use std::time::Duration;

use ratatui::style::Color;

use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
///
/// The grid is toroidal: every coordinate is folded back into
/// `[0, width) x [0, height)` by [`GridSize::wrap`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Folds any integer coordinate pair onto the grid.
    #[must_use]
    pub fn wrap(self, x: i32, y: i32) -> Position {
        debug_assert!(self.width > 0 && self.height > 0);

        Position {
            x: x.rem_euclid(i32::from(self.width)),
            y: y.rem_euclid(i32::from(self.height)),
        }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Derives a grid from a drawable area measured in terminal cells.
    ///
    /// Each logical cell is `cell_width` columns wide and one row tall.
    #[must_use]
    pub fn fit(columns: u16, rows: u16, cell_width: u16) -> Self {
        Self {
            width: columns / cell_width.max(1),
            height: rows,
        }
    }
}

/// Presentation selected on the command line or in the settings file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Solid coloured blocks, grid sized from the terminal.
    Blocks,
    /// Character cells on a fixed grid.
    Text,
}

/// Glyphs and colours for one presentation mode.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub food: &'static str,
    pub snake_body: &'static str,
    pub snake_head: &'static str,
    pub food_fg: Color,
    pub body_fg: Color,
    pub head_fg: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hint_fg: Color,
    pub overlay_fg: Color,
}

/// Windowed look: every cell is a double-width solid block.
pub const THEME_BLOCKS: Theme = Theme {
    name: "blocks",
    food: "██",
    snake_body: "██",
    snake_head: "██",
    food_fg: Color::Rgb(220, 60, 60),
    body_fg: Color::Rgb(80, 220, 100),
    head_fg: Color::Rgb(120, 255, 140),
    play_bg: Color::Rgb(20, 20, 20),
    border_fg: Color::DarkGray,
    hud_fg: Color::White,
    hint_fg: Color::DarkGray,
    overlay_fg: Color::Yellow,
};

/// Character-cell look.
pub const THEME_TEXT: Theme = Theme {
    name: "text",
    food: "*",
    snake_body: "O",
    snake_head: "@",
    food_fg: Color::Red,
    body_fg: Color::Green,
    head_fg: Color::LightGreen,
    play_bg: Color::Reset,
    border_fg: Color::Gray,
    hud_fg: Color::White,
    hint_fg: Color::DarkGray,
    overlay_fg: Color::Yellow,
};

impl Mode {
    /// Returns the theme drawn for this mode.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Blocks => &THEME_BLOCKS,
            Self::Text => &THEME_TEXT,
        }
    }

    /// Terminal columns occupied by one logical cell.
    #[must_use]
    pub fn cell_width(self) -> u16 {
        match self {
            Self::Blocks => CELL_WIDTH,
            Self::Text => 1,
        }
    }
}

/// Grid used by the text mode when no size is given.
pub const TEXT_GRID: GridSize = GridSize {
    width: 20,
    height: 12,
};

/// Terminal columns per logical cell in blocks mode.
pub const CELL_WIDTH: u16 = 2;

/// Smallest grid blocks mode accepts after fitting to the terminal.
pub const MIN_GRID_WIDTH: u16 = 8;
pub const MIN_GRID_HEIGHT: u16 = 6;

/// Smallest grid accepted when the size is set directly.
pub const MIN_EXPLICIT_GRID: u16 = 4;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Default movement rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 8;

/// Accepted movement rates.
pub const TICKS_PER_SECOND_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// Render cadence, independent of the movement rate.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Most movement ticks applied in a single frame after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Rows reserved around the play area: score line, border top/bottom, hint line.
pub const CHROME_ROWS: u16 = 4;

/// Columns reserved by the left and right border.
pub const CHROME_COLUMNS: u16 = 2;

/// Overlay shown while paused.
pub const PAUSED_TEXT: &str = "Paused — press P";

/// Overlay shown after a collision.
pub const GAME_OVER_TEXT: &str = "Game Over — press R/Enter/Space";

/// Controls hint printed under the board.
pub const CONTROLS_HINT: &str = "Arrows/WASD move · P pause · Q quit";
