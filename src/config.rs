use std::time::Duration;

use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
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
}

/// One column per hour of the day.
pub const SCHEDULE_COLUMNS: u16 = 24;

/// One row per day of the week.
pub const SCHEDULE_ROWS: u16 = 7;

/// Default board: the full week.
pub const SCHEDULE_GRID: GridSize = GridSize {
    width: SCHEDULE_COLUMNS,
    height: SCHEDULE_ROWS,
};

/// Row drawn with the highlighted day label (0 = Monday).
pub const HIGHLIGHT_ROW: u16 = 2;

/// Columns between thick hour dividers.
pub const HOURS_PER_DIVIDER: u16 = 3;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 240;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 70;

/// Milliseconds shaved off the tick interval per point scored.
pub const TICK_DECAY_PER_POINT_MS: u64 = 12;

/// Minimum swipe distance, in pixels, on the dominant axis.
pub const SWIPE_THRESHOLD_PX: f32 = 24.0;

/// Fallback pixel size of one terminal cell when the terminal does not report it.
pub const FALLBACK_CELL_PIXELS: (f32, f32) = (8.0, 16.0);

/// Starting layout for a new game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    pub start: Position,
    pub start_length: usize,
    pub start_direction: Direction,
    pub speed: SpeedPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: SCHEDULE_GRID,
            start: Position { x: 4, y: 3 },
            start_length: 3,
            start_direction: Direction::Right,
            speed: SpeedPolicy::default(),
        }
    }
}

impl GameConfig {
    /// True when the starting snake has a head and lies entirely on the board.
    #[must_use]
    pub fn start_fits(&self) -> bool {
        let trail = self.start_direction.opposite();
        self.start_length >= 1
            && std::iter::successors(Some(self.start), |cell| Some(cell.step(trail)))
                .take(self.start_length)
                .all(|cell| cell.is_within_bounds(self.bounds))
    }
}

/// How the tick interval reacts to the score.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpeedPolicy {
    /// Constant interval regardless of score.
    Fixed(Duration),
    /// `max(floor, base - score * decay_per_point)`.
    Accelerating {
        base: Duration,
        floor: Duration,
        decay_per_point: Duration,
    },
}

impl Default for SpeedPolicy {
    fn default() -> Self {
        Self::Accelerating {
            base: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            floor: Duration::from_millis(MIN_TICK_INTERVAL_MS),
            decay_per_point: Duration::from_millis(TICK_DECAY_PER_POINT_MS),
        }
    }
}

impl SpeedPolicy {
    /// Returns the tick interval for `score`.
    #[must_use]
    pub fn interval(self, score: u32) -> Duration {
        match self {
            Self::Fixed(interval) => interval,
            Self::Accelerating {
                base,
                floor,
                decay_per_point,
            } => decay_per_point
                .checked_mul(score)
                .map_or(floor, |decay| base.saturating_sub(decay).max(floor)),
        }
    }
}

/// Colors for the schedule board and its overlays.
#[derive(Debug)]
pub struct Theme {
    pub pattern_on: Color,
    pub pattern_off: Color,
    pub divider: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub label: Color,
    pub label_highlight: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Blue-on-grey schedule look.
pub const THEME_SCHEDULE: Theme = Theme {
    pattern_on: Color::Rgb(226, 232, 240),
    pattern_off: Color::Rgb(241, 245, 249),
    divider: Color::Rgb(100, 116, 139),
    snake_head: Color::Rgb(30, 64, 175),
    snake_body: Color::Rgb(59, 130, 246),
    food: Color::Rgb(234, 179, 8),
    label: Color::Gray,
    label_highlight: Color::Yellow,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Yellow,
};

/// Marker for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Marker for body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Marker for food.
pub const GLYPH_FOOD: &str = "●";

/// Thick divider drawn at the left edge of every third hour column.
pub const GLYPH_DIVIDER: &str = "┃";
