use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::schedule::Language;

/// Draws the waiting-board popup shown before the first game.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, best_score: u32, theme: &Theme) {
    let popup = centered_popup(area, 50, 70);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SCHEDULE SNAKE").style(title_style(theme)),
        Line::from(format!("Best score: {best_score}")),
        Line::from("[N] New game  [Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the pause popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 40, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED").style(title_style(theme)),
        Line::from("[Space] Resume"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the end-of-game overlay with the final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    win: bool,
    language: Language,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 80);
    frame.render_widget(Clear, popup);

    let lines = game_over_lines(score, win, language, theme);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn game_over_lines(
    score: u32,
    win: bool,
    language: Language,
    theme: &Theme,
) -> Vec<Line<'static>> {
    vec![
        Line::from(language.game_over_title(win)).style(title_style(theme)),
        Line::from(format!("{}: {score}", language.score_label())),
        Line::from("[N]/[R] Play again  [Esc] Close"),
    ]
}

fn title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD)
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
