use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring cell one step in `direction`, wrapped onto the grid.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        bounds.wrap(self.x + dx, self.y + dy)
    }
}

/// Ordered snake segments, head first, plus the direction of the last move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates the starting snake: centered, heading right, tail trailing left.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let segments = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|offset| bounds.wrap(head.x - offset, head.y))
            .collect();

        Self::from_segments(segments, Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Returns the snake after one step in `direction`.
    ///
    /// The new head is prepended; the tail is dropped unless `grow` is set, so
    /// a cell vacated by the tail is free for the head in the same step.
    #[must_use]
    pub fn advanced(&self, direction: Direction, grow: bool, bounds: GridSize) -> Self {
        let mut body = self.body.clone();
        body.push_front(self.head().step(direction, bounds));
        if !grow {
            let _ = body.pop_back();
        }

        Self { body, direction }
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_collides(&self) -> bool {
        collides(self.head(), self.body.iter().skip(1))
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction applied on the last move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

/// Returns true when `head` lands on any of `body`.
///
/// `body` must be the post-move segments without the head itself.
#[must_use]
pub fn collides<'a>(head: Position, mut body: impl Iterator<Item = &'a Position>) -> bool {
    body.any(|segment| *segment == head)
}
