use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::{
    GLYPH_DIVIDER, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, HIGHLIGHT_ROW,
    HOURS_PER_DIVIDER, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::schedule::{Language, has_divider, hour_label, is_pattern_on, short_hour_label};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Widest cell the board grows to; wider terminals just get margin.
const MAX_CELL_WIDTH: u16 = 7;

/// Width of an `HH-HH` label.
const HOUR_LABEL_WIDTH: u16 = 5;

/// Terminal geometry of the schedule board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardLayout {
    pub bounds: GridSize,
    /// Area the board may draw into; everything outside is clipped.
    pub area: Rect,
    /// Column strip holding the day names.
    pub labels: Rect,
    /// Rows holding the hour ranges.
    pub header: Rect,
    /// Top-left corner of cell (0, 0).
    pub origin: (u16, u16),
    pub cell_width: u16,
    pub cell_height: u16,
}

impl BoardLayout {
    /// Fits the board into `area`, keeping cells roughly square on screen.
    #[must_use]
    pub fn fit(area: Rect, bounds: GridSize, language: Language) -> Self {
        let label_width = (0..bounds.height)
            .map(|row| language.day_name(row).width())
            .max()
            .unwrap_or(0)
            .min(usize::from(area.width / 4)) as u16
            + 1;

        let columns = bounds.width.max(1);
        let rows = bounds.height.max(1);
        let cell_width =
            (area.width.saturating_sub(label_width) / columns).clamp(1, MAX_CELL_WIDTH);
        let header_rows = header_rows(cell_width).min(area.height);
        let cell_height = (area.height.saturating_sub(header_rows) / rows)
            .clamp(1, (cell_width / 2).max(1));

        let labels = Rect {
            x: area.x,
            y: area.y.saturating_add(header_rows),
            width: label_width.min(area.width),
            height: rows
                .saturating_mul(cell_height)
                .min(area.height.saturating_sub(header_rows)),
        };
        let header = Rect {
            x: area.x.saturating_add(label_width),
            y: area.y,
            width: columns
                .saturating_mul(cell_width)
                .min(area.width.saturating_sub(label_width)),
            height: header_rows,
        };

        Self {
            bounds,
            area,
            labels,
            header,
            origin: (header.x, labels.y),
            cell_width,
            cell_height,
        }
    }

    /// Screen rectangle covered by one board cell, before clipping.
    #[must_use]
    pub fn cell_rect(&self, position: Position) -> Option<Rect> {
        if !position.is_within_bounds(self.bounds) {
            return None;
        }

        let x = u16::try_from(position.x).ok()?;
        let y = u16::try_from(position.y).ok()?;

        Some(Rect {
            x: self.origin.0.saturating_add(x.saturating_mul(self.cell_width)),
            y: self.origin.1.saturating_add(y.saturating_mul(self.cell_height)),
            width: self.cell_width,
            height: self.cell_height,
        })
    }

    /// Part of a cell that may be drawn; empty when it falls off the board area.
    #[must_use]
    pub fn visible_cell(&self, position: Position) -> Option<Rect> {
        self.cell_rect(position)
            .map(|cell| cell.intersection(self.area))
            .filter(|cell| !cell.is_empty())
    }

    /// Whole board area, header and labels included.
    #[must_use]
    pub fn outer(&self) -> Rect {
        Rect {
            x: self.labels.x,
            y: self.header.y,
            width: self.labels.width + self.header.width,
            height: self.header.height + self.labels.height,
        }
        .intersection(self.area)
    }
}

/// Header rows needed so every `HH-HH` label fits, staggering labels across
/// rows when one cell is narrower than a label.
fn header_rows(cell_width: u16) -> u16 {
    match cell_width {
        0 | 1 => 1,
        width if width >= HOUR_LABEL_WIDTH => 1,
        width => (HOUR_LABEL_WIDTH + 1).div_ceil(width),
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let theme = hud_info.theme;
    let board_area = render_hud(frame, area, state, &hud_info);
    let layout = BoardLayout::fit(
        board_area.intersection(frame.buffer_mut().area),
        state.bounds(),
        hud_info.language,
    );

    let buffer = frame.buffer_mut();
    render_labels(buffer, &layout, hud_info.language, theme);
    render_background(buffer, &layout, theme);
    render_food(buffer, &layout, state, theme);
    render_snake(buffer, &layout, state, theme);

    let popup_area = layout.outer();
    match state.status {
        GameStatus::Ready => render_start_menu(frame, popup_area, hud_info.best_score, theme),
        GameStatus::Paused => render_pause_menu(frame, popup_area, theme),
        status if status.is_over() && hud_info.overlay_visible => render_game_over_menu(
            frame,
            popup_area,
            state.score,
            state.status == GameStatus::Won,
            hud_info.language,
            theme,
        ),
        _ => {}
    }
}

fn render_labels(buffer: &mut Buffer, layout: &BoardLayout, language: Language, theme: &Theme) {
    let header_rows = layout.header.height;
    for column in 0..layout.bounds.width {
        let Some(cell) = layout.cell_rect(Position {
            x: i32::from(column),
            y: 0,
        }) else {
            continue;
        };

        // One-character cells only have room for a short label per hour block.
        let (label, y) = if layout.cell_width < 2 {
            if column % HOURS_PER_DIVIDER != 0 {
                continue;
            }
            (short_hour_label(column), layout.header.y)
        } else if header_rows == 0 {
            continue;
        } else {
            (hour_label(column), layout.header.y + column % header_rows)
        };

        if !layout.area.contains((cell.x, y).into()) {
            continue;
        }
        let max_width = layout.header.right().saturating_sub(cell.x);
        buffer.set_stringn(
            cell.x,
            y,
            label,
            usize::from(max_width),
            Style::new().fg(theme.label),
        );
    }

    for row in 0..layout.bounds.height {
        let Some(cell) = layout.cell_rect(Position {
            x: 0,
            y: i32::from(row),
        }) else {
            continue;
        };
        let style = if row == HIGHLIGHT_ROW {
            Style::new()
                .fg(theme.label_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.label)
        };
        let y = cell.y + cell.height / 2;
        if !layout.area.contains((layout.labels.x, y).into()) {
            continue;
        }
        buffer.set_stringn(
            layout.labels.x,
            y,
            language.day_name(row),
            usize::from(layout.labels.width.saturating_sub(1)),
            style,
        );
    }
}

fn render_background(buffer: &mut Buffer, layout: &BoardLayout, theme: &Theme) {
    for y in 0..layout.bounds.height {
        for x in 0..layout.bounds.width {
            let position = Position {
                x: i32::from(x),
                y: i32::from(y),
            };
            let Some(area) = layout.visible_cell(position) else {
                continue;
            };
            let bg = if is_pattern_on(x, y) {
                theme.pattern_on
            } else {
                theme.pattern_off
            };
            buffer.set_style(area, Style::new().bg(bg));

            let starts_at_cell = layout
                .cell_rect(position)
                .is_some_and(|cell| cell.x == area.x);
            if has_divider(x) && layout.cell_width > 1 && starts_at_cell {
                for row in area.top()..area.bottom() {
                    buffer.set_string(
                        area.x,
                        row,
                        GLYPH_DIVIDER,
                        Style::new().fg(theme.divider).bg(bg),
                    );
                }
            }
        }
    }
}

fn render_food(buffer: &mut Buffer, layout: &BoardLayout, state: &GameState, theme: &Theme) {
    let Some(food) = state.food else {
        return;
    };
    let Some(cell) = layout.cell_rect(food) else {
        return;
    };

    let x = cell.x + cell.width / 2;
    let y = cell.y + cell.height / 2;
    if layout.area.contains((x, y).into()) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }
}

fn render_snake(buffer: &mut Buffer, layout: &BoardLayout, state: &GameState, theme: &Theme) {
    for (index, segment) in state.snake.segments().enumerate() {
        let Some(fill) = layout.visible_cell(*segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        // Leave the divider column visible so the hour blocks stay readable.
        let column = u16::try_from(segment.x).unwrap_or(0);
        let inset = u16::from(has_divider(column) && layout.cell_width > 1);
        for y in fill.top()..fill.bottom() {
            for x in fill.left().saturating_add(inset)..fill.right() {
                buffer.set_string(x, y, glyph, style);
            }
        }
    }
}
