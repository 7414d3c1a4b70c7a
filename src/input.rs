use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step on the grid; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    let (cx, cy) = current.delta();
    let (nx, ny) = next.delta();
    !(cx + nx == 0 && cy + ny == 0)
}

/// Picks the direction to travel: `requested`, unless it reverses `current`.
#[must_use]
pub fn resolve_direction(current: Direction, requested: Direction) -> Direction {
    if direction_change_is_valid(current, requested) {
        requested
    } else {
        current
    }
}

/// Translates one key press into a game input.
///
/// Only presses count: releases, auto-repeats, unknown keys and modifier
/// chords other than `Ctrl+C` yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Char('p' | 'P') => GameInput::Pause,
        KeyCode::Char('r' | 'R' | ' ') | KeyCode::Enter => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Raw terminal events relevant to the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize { columns: u16, rows: u16 },
}

/// Non-blocking reader over the terminal event queue.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every event that is already pending without waiting.
    pub fn drain(&mut self) -> io::Result<Vec<RawEvent>> {
        let mut pending = Vec::new();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => pending.push(RawEvent::Key(key)),
                Event::Resize(columns, rows) => pending.push(RawEvent::Resize { columns, rows }),
                _ => {}
            }
        }

        Ok(pending)
    }
}
