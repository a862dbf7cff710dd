use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{FALLBACK_CELL_PIXELS, SWIPE_THRESHOLD_PX};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
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

    /// Returns the unit step `(dx, dy)`; `y` grows downwards.
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

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    NewGame,
    Restart,
    Dismiss,
    Quit,
}

/// Maps one key press to a game input.
///
/// Besides arrows and WASD, the letters sitting on the WASD keys of the
/// Ukrainian and Russian layouts are accepted so play does not depend on the
/// active keyboard layout.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up => GameInput::Direction(Direction::Up),
        KeyCode::Down => GameInput::Direction(Direction::Down),
        KeyCode::Left => GameInput::Direction(Direction::Left),
        KeyCode::Right => GameInput::Direction(Direction::Right),
        KeyCode::Char('w' | 'W' | 'ц' | 'Ц') => GameInput::Direction(Direction::Up),
        KeyCode::Char('s' | 'S' | 'і' | 'І' | 'ы' | 'Ы') => GameInput::Direction(Direction::Down),
        KeyCode::Char('a' | 'A' | 'ф' | 'Ф') => GameInput::Direction(Direction::Left),
        KeyCode::Char('d' | 'D' | 'в' | 'В') => GameInput::Direction(Direction::Right),
        KeyCode::Char(' ') => GameInput::Pause,
        KeyCode::Char('n' | 'N') => GameInput::NewGame,
        KeyCode::Char('r' | 'R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Enter => GameInput::Dismiss,
        KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Classifies a swipe by its displacement in pixels.
///
/// Returns `None` when neither axis moved more than `threshold`. The dominant
/// axis wins; ties go to the vertical axis.
#[must_use]
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx <= threshold && ady <= threshold {
        return None;
    }

    if adx > ady {
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Turns mouse drag gestures into swipe directions.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    cell_pixels: (f32, f32),
    threshold: f32,
    start: Option<(u16, u16)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(FALLBACK_CELL_PIXELS, SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    /// Creates a tracker for terminal cells of `cell_pixels` (width, height).
    #[must_use]
    pub fn new(cell_pixels: (f32, f32), threshold: f32) -> Self {
        Self {
            cell_pixels,
            threshold,
            start: None,
        }
    }

    /// Creates a tracker sized from the terminal's reported pixel geometry,
    /// falling back to a typical cell size when it is unavailable.
    #[must_use]
    pub fn from_terminal() -> Self {
        let cell_pixels = crossterm::terminal::window_size()
            .ok()
            .filter(|size| size.columns > 0 && size.rows > 0 && size.width > 0 && size.height > 0)
            .map_or(FALLBACK_CELL_PIXELS, |size| {
                (
                    f32::from(size.width) / f32::from(size.columns),
                    f32::from(size.height) / f32::from(size.rows),
                )
            });

        Self::new(cell_pixels, SWIPE_THRESHOLD_PX)
    }

    /// Feeds one mouse event; returns a direction when a swipe completes.
    pub fn handle(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (start_column, start_row) = self.start.take()?;
                let dx = (f32::from(event.column) - f32::from(start_column)) * self.cell_pixels.0;
                let dy = (f32::from(event.row) - f32::from(start_row)) * self.cell_pixels.1;
                classify_swipe(dx, dy, self.threshold)
            }
            _ => None,
        }
    }
}
