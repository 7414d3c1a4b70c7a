use crossterm::event::KeyEvent;
use rand::Rng;

use crate::config::GridSize;
use crate::food::spawn_food_around;
use crate::input::{Direction, GameInput, map_key, resolve_direction};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// One event delivered by the input/timer collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    /// Window or terminal asked to close.
    Quit,
    KeyDown(KeyEvent),
    /// One movement period has elapsed.
    TickElapsed,
}

/// What the loop owner should do after an event was applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Complete game state for one session.
///
/// The random source is not part of the state; callers pass it to every
/// operation that may place food.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction buffered for the next tick.
    pub requested: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    bounds: GridSize,
}

impl GameState {
    /// Creates a running game with a centered snake and one food.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(bounds: GridSize, rng: &mut R) -> Self {
        let snake = Snake::centered(bounds);
        let food = spawn_food_around(rng, bounds, &snake);

        Self {
            requested: snake.direction(),
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            bounds,
        }
    }

    /// Replaces everything with a fresh game on the same grid.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.bounds, rng);
    }

    /// Grid this game is played on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Applies one event from the loop.
    pub fn apply<R: Rng + ?Sized>(&mut self, event: GameEvent, rng: &mut R) -> Control {
        match event {
            GameEvent::Quit => Control::Quit,
            GameEvent::KeyDown(key) => match map_key(key) {
                Some(input) => self.apply_input(input, rng),
                None => Control::Continue,
            },
            GameEvent::TickElapsed => {
                self.tick(rng);
                Control::Continue
            }
        }
    }

    /// Applies one translated input.
    pub fn apply_input<R: Rng + ?Sized>(&mut self, input: GameInput, rng: &mut R) -> Control {
        match input {
            GameInput::Quit => return Control::Quit,
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.requested = resolve_direction(self.requested, direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    GameStatus::GameOver => GameStatus::GameOver,
                };
            }
            GameInput::Restart => {
                if self.status == GameStatus::GameOver {
                    self.restart(rng);
                }
            }
        }

        Control::Continue
    }

    /// Advances simulation by one movement tick.
    ///
    /// The move is computed on a copy of the snake and committed only when the
    /// new head does not collide, so a game-over board shows the last valid
    /// position.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.status != GameStatus::Running {
            return;
        }

        let direction = resolve_direction(self.snake.direction(), self.requested);
        let next_head = self.snake.head().step(direction, self.bounds);
        let grow = self.food == Some(next_head);

        let moved = self.snake.advanced(direction, grow, self.bounds);
        if moved.head_collides() {
            self.status = GameStatus::GameOver;
            return;
        }

        self.snake = moved;
        self.requested = direction;

        if grow {
            self.score += 1;
            self.food = spawn_food_around(rng, self.bounds, &self.snake);
        }
    }
}

/// Folds a batch of events into `state`.
///
/// Processing stops at the first event that asks to quit.
#[must_use]
pub fn update<R: Rng + ?Sized>(
    mut state: GameState,
    events: &[GameEvent],
    rng: &mut R,
) -> (GameState, Control) {
    for event in events {
        if state.apply(*event, rng) == Control::Quit {
            return (state, Control::Quit);
        }
    }

    (state, Control::Continue)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{Control, GameEvent, GameState, GameStatus, update};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn key(code: KeyCode) -> GameEvent {
        GameEvent::KeyDown(KeyEvent::from(code))
    }

    fn snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_segments(
            cells.iter().map(|&(x, y)| Position { x, y }).collect(),
            direction,
        )
    }

    fn state_with(snake: Snake, food: Option<Position>, rng: &mut StdRng) -> GameState {
        let mut state = GameState::new(BOUNDS, rng);
        state.requested = snake.direction();
        state.snake = snake;
        state.food = food;
        state
    }

    #[test]
    fn new_game_starts_running_with_food_off_the_snake() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::new(BOUNDS, &mut rng);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 4);
        let food = state.food.expect("empty grid has room for food");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn snake_grows_and_scores_after_eating_food() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = state_with(
            snake(&[(1, 1), (0, 1)], Direction::Right),
            Some(Position { x: 2, y: 1 }),
            &mut rng,
        );

        state.tick(&mut rng);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 1);
        let food = state.food.expect("food respawns");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn plain_move_keeps_length_and_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state_with(
            snake(&[(1, 1), (0, 1)], Direction::Right),
            Some(Position { x: 8, y: 8 }),
            &mut rng,
        );

        state.tick(&mut rng);

        assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 0);
        assert_eq!(state.food, Some(Position { x: 8, y: 8 }));
    }

    #[test]
    fn self_collision_sets_game_over_without_committing_move() {
        let mut rng = StdRng::seed_from_u64(4);
        let body = snake(&[(2, 2), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2)], Direction::Left);
        let mut state = state_with(body.clone(), None, &mut rng);
        state.requested = Direction::Down;

        state.tick(&mut rng);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake, body);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn ticks_are_ignored_while_paused_or_over() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new(BOUNDS, &mut rng);

        state.apply_input(GameInput::Pause, &mut rng);
        let paused = state.clone();
        state.tick(&mut rng);
        assert_eq!(state, paused);

        state.status = GameStatus::GameOver;
        let over = state.clone();
        state.tick(&mut rng);
        assert_eq!(state, over);
    }

    #[test]
    fn double_pause_toggle_restores_identical_state() {
        let mut rng = StdRng::seed_from_u64(6);
        let before = GameState::new(BOUNDS, &mut rng);

        let (after, control) = update(
            before.clone(),
            &[key(KeyCode::Char('p')), key(KeyCode::Char('P'))],
            &mut rng,
        );

        assert_eq!(control, Control::Continue);
        assert_eq!(after, before);
    }

    #[test]
    fn held_pause_key_does_not_toggle_back() {
        let mut rng = StdRng::seed_from_u64(14);
        let state = GameState::new(BOUNDS, &mut rng);
        let mut repeat = KeyEvent::from(KeyCode::Char('p'));
        repeat.kind = KeyEventKind::Repeat;

        let (state, _) = update(
            state,
            &[key(KeyCode::Char('p')), GameEvent::KeyDown(repeat)],
            &mut rng,
        );

        assert_eq!(state.status, GameStatus::Paused);
    }

    #[test]
    fn pause_has_no_effect_after_game_over() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = GameState::new(BOUNDS, &mut rng);
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::Pause, &mut rng);

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn restart_is_only_honored_after_game_over() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut state = state_with(
            snake(&[(1, 1), (0, 1)], Direction::Right),
            None,
            &mut rng,
        );
        state.score = 3;

        state.apply(key(KeyCode::Char('r')), &mut rng);
        assert_eq!(state.score, 3);
        assert_eq!(state.snake.len(), 2);

        state.status = GameStatus::GameOver;
        state.apply(key(KeyCode::Enter), &mut rng);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake, Snake::centered(BOUNDS));
        assert_eq!(state.requested, Direction::Right);
    }

    #[test]
    fn direction_keys_are_ignored_while_paused() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = GameState::new(BOUNDS, &mut rng);
        state.apply_input(GameInput::Pause, &mut rng);

        state.apply(key(KeyCode::Up), &mut rng);

        assert_eq!(state.requested, Direction::Right);
    }

    #[test]
    fn last_direction_before_tick_wins() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut state = state_with(
            snake(&[(5, 5), (4, 5)], Direction::Right),
            None,
            &mut rng,
        );

        let (mut state_after, _) = update(
            state.clone(),
            &[
                key(KeyCode::Up),
                key(KeyCode::Char('d')),
                key(KeyCode::Char('s')),
                GameEvent::TickElapsed,
            ],
            &mut rng,
        );
        assert_eq!(state_after.snake.head(), Position { x: 5, y: 6 });
        assert_eq!(state_after.snake.direction(), Direction::Down);

        state_after.tick(&mut rng);
        assert_eq!(state_after.snake.head(), Position { x: 5, y: 7 });

        // Up then Left: Left is legal against the buffered Up but reverses the
        // applied Right, so the tick keeps going right.
        state.apply(key(KeyCode::Up), &mut rng);
        state.apply(key(KeyCode::Left), &mut rng);
        assert_eq!(state.requested, Direction::Left);
        state.tick(&mut rng);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn filling_the_grid_leaves_no_food_and_keeps_running() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 4,
            height: 1,
        };
        let mut state = GameState::new(bounds, &mut rng);
        state.snake = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right);
        state.food = Some(Position { x: 3, y: 0 });

        state.tick(&mut rng);

        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);
        assert_eq!(state.food, None);
        assert_eq!(state.status, GameStatus::Running);

        // The only reachable cell is the tail being vacated.
        state.tick(&mut rng);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position { x: 0, y: 0 });
    }

    #[test]
    fn quit_is_honored_in_every_state() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut state = GameState::new(BOUNDS, &mut rng);

        for status in [GameStatus::Running, GameStatus::Paused, GameStatus::GameOver] {
            state.status = status;
            assert_eq!(state.apply(key(KeyCode::Esc), &mut rng), Control::Quit);
            assert_eq!(state.apply(key(KeyCode::Char('q')), &mut rng), Control::Quit);
            assert_eq!(state.apply(GameEvent::Quit, &mut rng), Control::Quit);
        }
    }

    #[test]
    fn update_stops_at_quit() {
        let mut rng = StdRng::seed_from_u64(13);
        let state = GameState::new(BOUNDS, &mut rng);
        let head = state.snake.head();

        let (state, control) = update(
            state,
            &[GameEvent::Quit, GameEvent::TickElapsed],
            &mut rng,
        );

        assert_eq!(control, Control::Quit);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn unknown_keys_leave_state_untouched() {
        let mut rng = StdRng::seed_from_u64(14);
        let before = GameState::new(BOUNDS, &mut rng);

        let (after, control) = update(
            before.clone(),
            &[key(KeyCode::Char('x')), key(KeyCode::F(5)), key(KeyCode::Tab)],
            &mut rng,
        );

        assert_eq!(control, Control::Continue);
        assert_eq!(after, before);
    }
}
