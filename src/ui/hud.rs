use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};
use crate::schedule::Language;

/// Supplemental values displayed alongside the board.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub best_score: u32,
    /// `Pause` or `Resume`, depending on the current state.
    pub pause_label: &'static str,
    pub overlay_visible: bool,
    pub language: Language,
    pub theme: &'a Theme,
}

/// Renders the score and control rows and returns the area above them.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [board_area, score_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, info)).alignment(Alignment::Left),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(controls_line(info)).alignment(Alignment::Left),
        controls_area,
    );

    board_area
}

fn score_line(state: &GameState, info: &HudInfo<'_>) -> Line<'static> {
    let value = Style::default()
        .fg(info.theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(info.theme.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", muted),
        Span::styled(state.score.to_string(), value),
        Span::styled(" │ ", muted),
        Span::styled("Best: ", muted),
        Span::styled(info.best_score.to_string(), value),
        Span::styled(" │ ", muted),
        Span::styled(status_text(state.status), muted),
    ])
}

fn controls_line(info: &HudInfo<'_>) -> Line<'static> {
    let key = Style::default().fg(info.theme.hud_score);
    let muted = Style::default().fg(info.theme.hud_muted);

    let mut spans = Vec::new();
    for (label, action) in [
        ("[N]", "New game"),
        ("[Space]", info.pause_label),
        ("[R]", "Restart"),
        ("[Esc]", "Close"),
        ("[Q]", "Quit"),
    ] {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(label, key));
        spans.push(Span::styled(format!(" {action}"), muted));
    }

    Line::from(spans)
}

fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Ready => "Ready",
        GameStatus::Running => "Playing",
        GameStatus::Paused => "Paused",
        GameStatus::Lost => "Game over",
        GameStatus::Won => "Board full",
    }
}
