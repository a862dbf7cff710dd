use std::time::Instant;

use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::game::{GameState, GameStatus, StepEvent};
use crate::input::GameInput;
use crate::score::{ScoreStore, load_or_default};

/// Ties the engine to its clock, best-score store and overlay.
///
/// All inputs are applied synchronously between ticks by the single frame loop.
pub struct App<S: ScoreStore> {
    pub state: GameState,
    pub best_score: u32,
    pub overlay_visible: bool,
    clock: TickClock,
    store: S,
}

impl<S: ScoreStore> App<S> {
    /// Lays out a `Ready` board and reads the stored best score.
    pub fn new(config: GameConfig, seed: u64, store: S) -> Self {
        let best_score = load_or_default(&store);
        log::info!("best score loaded: {best_score}");

        Self {
            state: GameState::ready(config, seed),
            best_score,
            overlay_visible: false,
            clock: TickClock::new(),
            store,
        }
    }

    /// Applies one input. Returns false when the user asked to quit.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> bool {
        match input {
            GameInput::Quit => {
                self.clock.stop();
                return false;
            }
            GameInput::NewGame | GameInput::Restart => self.new_game(now),
            GameInput::Pause => self.toggle_pause(now),
            GameInput::Dismiss => self.overlay_visible = false,
            GameInput::Direction(direction) => self.state.set_direction(direction),
        }

        true
    }

    /// Runs any tick that is due at `now`.
    pub fn update(&mut self, now: Instant) -> Option<StepEvent> {
        if !self.clock.poll(now) {
            return None;
        }

        let event = self.state.step()?;
        match event {
            StepEvent::Moved => {}
            StepEvent::Ate => self.record_score(),
            StepEvent::GameOver { win } => {
                self.record_score();
                self.clock.stop();
                self.overlay_visible = true;
                log::info!(
                    "game over after {} ticks: score {}, win {win}",
                    self.state.tick_count,
                    self.state.score
                );
                return Some(event);
            }
        }

        self.clock.arm(now, self.state.tick_interval());
        Some(event)
    }

    /// Label for the pause button.
    #[must_use]
    pub fn pause_label(&self) -> &'static str {
        if self.state.status == GameStatus::Paused {
            "Resume"
        } else {
            "Pause"
        }
    }

    #[must_use]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    fn new_game(&mut self, now: Instant) {
        if self.state.status == GameStatus::Ready {
            self.state.start();
        } else {
            self.state.restart();
        }
        self.overlay_visible = false;
        self.clock.arm(now, self.state.tick_interval());
        log::debug!("new game started");
    }

    fn toggle_pause(&mut self, now: Instant) {
        self.state.toggle_pause();
        match self.state.status {
            GameStatus::Paused => self.clock.stop(),
            GameStatus::Running => self.clock.arm(now, self.state.tick_interval()),
            _ => {}
        }
    }

    fn record_score(&mut self) {
        if self.state.score <= self.best_score {
            return;
        }

        self.best_score = self.state.score;
        if let Err(error) = self.store.save(self.best_score) {
            log::warn!("failed to save best score: {error}");
        }
    }
}
