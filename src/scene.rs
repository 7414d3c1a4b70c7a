//! Backend-neutral description of one frame.
//!
//! [`describe`] turns a [`GameState`] into a draw list that any front-end can
//! paint; the ratatui renderer is one such consumer.

use crate::config::{GAME_OVER_TEXT, PAUSED_TEXT};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// What occupies a drawn cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Food,
    Body,
    Head,
}

/// One cell to fill.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DrawCell {
    pub position: Position,
    pub kind: CellKind,
}

/// Everything a front-end needs to draw a frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    /// Paint order: food, body from neck to tail, head last.
    pub cells: Vec<DrawCell>,
    pub score_line: String,
    /// Centered message for paused and game-over states.
    pub overlay: Option<&'static str>,
}

/// Builds the draw list for `state`.
#[must_use]
pub fn describe(state: &GameState) -> Scene {
    let mut cells = Vec::with_capacity(state.snake.len() + 1);

    if let Some(food) = state.food {
        cells.push(DrawCell {
            position: food,
            kind: CellKind::Food,
        });
    }

    cells.extend(state.snake.segments().skip(1).map(|&position| DrawCell {
        position,
        kind: CellKind::Body,
    }));
    cells.push(DrawCell {
        position: state.snake.head(),
        kind: CellKind::Head,
    });

    let overlay = match state.status {
        GameStatus::Running => None,
        GameStatus::Paused => Some(PAUSED_TEXT),
        GameStatus::GameOver => Some(GAME_OVER_TEXT),
    };

    Scene {
        cells,
        score_line: format!("Score: {}", state.score),
        overlay,
    }
}
