use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, GridSize};
use crate::food::spawn_position;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Board laid out, waiting for the first New Game.
    Ready,
    Running,
    Paused,
    Lost,
    Won,
}

impl GameStatus {
    /// Returns true for the terminal Lost and Won states.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepEvent {
    Moved,
    Ate,
    GameOver { win: bool },
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Starts a running game with an entropy-seeded RNG.
    #[must_use]
    pub fn new_game(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic running game for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Lays out a fresh board that waits in `Ready` until [`GameState::start`].
    #[must_use]
    pub fn ready(config: GameConfig, seed: u64) -> Self {
        let mut state = Self::new_with_seed(config, seed);
        state.status = GameStatus::Ready;
        state
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        debug_assert!(config.start_fits(), "start layout must lie on the board");
        let snake = Snake::new(config.start, config.start_length, config.start_direction);
        let food = spawn_position(&mut rng, config.bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            config,
            rng,
        }
    }

    /// Replaces this state with a fresh running game, reusing the RNG stream.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(self.config, rng);
    }

    /// Moves a `Ready` board into play.
    pub fn start(&mut self) {
        if self.status == GameStatus::Ready {
            self.status = GameStatus::Running;
        }
    }

    /// Buffers a turn for the next tick; reversals are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.buffer_direction(direction);
    }

    /// Advances simulation by one tick.
    ///
    /// Returns `None` without touching the state unless the game is running.
    pub fn step(&mut self) -> Option<StepEvent> {
        if self.status != GameStatus::Running {
            return None;
        }

        self.tick_count += 1;
        let next = self.snake.commit_direction();

        // The tail still counts as occupied on the tick it would be vacated.
        if !next.is_within_bounds(self.config.bounds) || self.snake.occupies(next) {
            self.status = GameStatus::Lost;
            return Some(StepEvent::GameOver { win: false });
        }

        self.snake.push_head(next);

        if self.food != Some(next) {
            self.snake.pop_tail();
            return Some(StepEvent::Moved);
        }

        self.score += 1;
        self.food = spawn_position(&mut self.rng, self.config.bounds, &self.snake);
        if self.food.is_none() {
            self.status = GameStatus::Won;
            return Some(StepEvent::GameOver { win: true });
        }

        Some(StepEvent::Ate)
    }

    /// Flips between running and paused; other states are left alone.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Pauses a running game.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    /// Resumes a paused game.
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// Returns the clock interval to wait before the next tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.config.speed.interval(self.score)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.bounds
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::{GameConfig, GridSize};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus, StepEvent};

    fn schedule_state(seed: u64) -> GameState {
        GameState::new_with_seed(GameConfig::default(), seed)
    }

    fn small_config(width: u16, height: u16) -> GameConfig {
        GameConfig {
            bounds: GridSize { width, height },
            start: Position { x: 2, y: 0 },
            ..GameConfig::default()
        }
    }

    fn cells(state: &GameState) -> Vec<Position> {
        state.snake.segments().copied().collect()
    }

    #[test]
    fn new_game_lays_out_three_cells_and_food() {
        let state = schedule_state(1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(
            cells(&state),
            vec![
                Position { x: 4, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ]
        );
        let food = state.food.expect("empty board has room for food");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn step_moves_head_and_drops_tail() {
        let mut state = schedule_state(2);
        state.food = Some(Position { x: 20, y: 0 });

        assert_eq!(state.step(), Some(StepEvent::Moved));
        assert_eq!(
            cells(&state),
            vec![
                Position { x: 5, y: 3 },
                Position { x: 4, y: 3 },
                Position { x: 3, y: 3 },
            ]
        );
    }

    #[test]
    fn leaving_the_grid_loses() {
        let mut state = schedule_state(3);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Left,
        );

        assert_eq!(state.step(), Some(StepEvent::GameOver { win: false }));
        assert_eq!(state.status, GameStatus::Lost);
        assert_eq!(state.step(), None);
    }

    #[test]
    fn running_into_own_body_loses() {
        let mut state = schedule_state(4);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Left,
        );
        state.set_direction(Direction::Down);

        assert_eq!(state.step(), Some(StepEvent::GameOver { win: false }));
        assert_eq!(state.status, GameStatus::Lost);
    }

    #[test]
    fn moving_into_the_vacating_tail_still_loses() {
        let mut state = schedule_state(5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Left,
        );
        state.food = Some(Position { x: 10, y: 0 });
        state.set_direction(Direction::Down);

        assert_eq!(state.step(), Some(StepEvent::GameOver { win: false }));
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut state = schedule_state(6);
        state.food = Some(Position { x: 5, y: 3 });

        assert_eq!(state.step(), Some(StepEvent::Ate));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position { x: 5, y: 3 });
        let food = state.food.expect("board still has room");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn filling_the_board_wins() {
        let mut state = GameState::new_with_seed(small_config(3, 1), 7);
        state.snake = Snake::from_segments(
            vec![Position { x: 1, y: 0 }, Position { x: 0, y: 0 }],
            Direction::Right,
        );
        state.food = Some(Position { x: 2, y: 0 });

        assert_eq!(state.step(), Some(StepEvent::GameOver { win: true }));
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.food, None);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn reversal_does_not_change_pending_direction() {
        let mut state = schedule_state(8);
        state.food = Some(Position { x: 20, y: 0 });

        state.set_direction(Direction::Left);

        assert_eq!(state.snake.pending_direction(), Direction::Right);
        assert_eq!(state.step(), Some(StepEvent::Moved));
        assert_eq!(state.snake.head(), Position { x: 5, y: 3 });
    }

    #[test]
    fn only_last_direction_before_tick_applies() {
        let mut state = schedule_state(9);
        state.food = Some(Position { x: 20, y: 0 });

        state.set_direction(Direction::Up);
        state.set_direction(Direction::Down);
        state.step();

        assert_eq!(state.snake.head(), Position { x: 4, y: 4 });
        assert_eq!(state.snake.direction(), Direction::Down);
    }

    #[test]
    fn pause_freezes_everything_and_toggles_back() {
        let mut state = schedule_state(10);
        state.set_direction(Direction::Up);
        let before = cells(&state);

        state.toggle_pause();
        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.step(), None);

        state.toggle_pause();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(cells(&state), before);
        assert_eq!(state.snake.pending_direction(), Direction::Up);
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn terminal_states_ignore_pause() {
        let mut state = schedule_state(11);
        state.status = GameStatus::Lost;

        state.toggle_pause();
        state.pause();

        assert_eq!(state.status, GameStatus::Lost);
    }

    #[test]
    fn ready_board_waits_for_start() {
        let mut state = GameState::ready(GameConfig::default(), 12);

        assert_eq!(state.step(), None);
        state.start();
        assert_eq!(state.status, GameStatus::Running);
        assert!(state.step().is_some());
    }

    #[test]
    fn restart_resets_score_and_layout() {
        let mut state = schedule_state(13);
        state.food = Some(Position { x: 5, y: 3 });
        state.step();
        state.status = GameStatus::Lost;

        state.restart();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "start layout must lie on the board")]
    fn off_grid_start_layout_is_rejected() {
        let _ = GameState::new_with_seed(small_config(2, 1), 1);
    }

    #[test]
    fn random_walk_preserves_invariants() {
        let turns = [Direction::Up, Direction::Right, Direction::Down, Direction::Right];
        for seed in 0..20 {
            let mut state = schedule_state(seed);
            let mut tick = 0usize;

            while state.status == GameStatus::Running && tick < 500 {
                let length_before = state.snake.len();
                let score_before = state.score;
                state.set_direction(turns[(tick / 3 + seed as usize) % turns.len()]);

                let event = state.step();

                if state.status == GameStatus::Running {
                    let ate = u32::from(event == Some(StepEvent::Ate));
                    assert_eq!(state.snake.len(), length_before + ate as usize);
                    assert_eq!(state.score, score_before + ate);
                    assert_eq!(state.snake.len(), 3 + state.score as usize);

                    let unique: HashSet<_> = state.snake.segments().collect();
                    assert_eq!(unique.len(), state.snake.len());
                    if let Some(food) = state.food {
                        assert!(!state.snake.occupies(food));
                    }
                }
                tick += 1;
            }
        }
    }
}
