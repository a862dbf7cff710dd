//! Static labels and patterns for the weekly schedule board.

use clap::ValueEnum;

use crate::config::HOURS_PER_DIVIDER;

const DAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DAY_NAMES_UK: [&str; 7] = [
    "Понеділок",
    "Вівторок",
    "Середа",
    "Четвер",
    "П'ятниця",
    "Субота",
    "Неділя",
];

/// Language used for day labels and overlay text.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl Language {
    /// Name of the day drawn on `row`; rows past Sunday are left blank.
    #[must_use]
    pub fn day_name(self, row: u16) -> &'static str {
        let names = match self {
            Self::En => &DAY_NAMES_EN,
            Self::Uk => &DAY_NAMES_UK,
        };
        names.get(usize::from(row)).copied().unwrap_or("")
    }

    /// Overlay title for a finished game.
    #[must_use]
    pub fn game_over_title(self, win: bool) -> &'static str {
        match (self, win) {
            (Self::En, true) => "You filled the schedule!",
            (Self::En, false) => "Game over",
            (Self::Uk, true) => "Ви заповнили сітку!",
            (Self::Uk, false) => "Гра закінчилась",
        }
    }

    /// Prefix for the final score line.
    #[must_use]
    pub fn score_label(self) -> &'static str {
        match self {
            Self::En => "Your score",
            Self::Uk => "Ваш рахунок",
        }
    }
}

/// Hour-range label for a column, e.g. `07-08` or `23-00`.
#[must_use]
pub fn hour_label(column: u16) -> String {
    let start = column % 24;
    let end = (column + 1) % 24;
    format!("{start:02}-{end:02}")
}

/// Short label used when columns are too narrow for the full range.
#[must_use]
pub fn short_hour_label(column: u16) -> String {
    format!("{:02}", column % 24)
}

/// True for the checkerboard cells drawn in the "on" shade.
#[must_use]
pub fn is_pattern_on(x: u16, y: u16) -> bool {
    (x + y) % 2 == 1
}

/// True when a thick divider separates this column from the previous one.
#[must_use]
pub fn has_divider(column: u16) -> bool {
    column != 0 && column % HOURS_PER_DIVIDER == 0
}

#[cfg(test)]
mod tests {
    use super::{Language, has_divider, hour_label, is_pattern_on, short_hour_label};

    #[test]
    fn hour_labels_are_zero_padded_and_wrap_at_midnight() {
        assert_eq!(hour_label(0), "00-01");
        assert_eq!(hour_label(9), "09-10");
        assert_eq!(hour_label(23), "23-00");
        assert_eq!(short_hour_label(7), "07");
    }

    #[test]
    fn dividers_fall_every_three_hours_after_midnight() {
        let columns: Vec<u16> = (0..24).filter(|column| has_divider(*column)).collect();

        assert_eq!(columns, vec![3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn checkerboard_alternates_by_parity() {
        assert!(!is_pattern_on(0, 0));
        assert!(is_pattern_on(1, 0));
        assert!(is_pattern_on(0, 1));
        assert!(!is_pattern_on(3, 5));
    }

    #[test]
    fn day_names_follow_language() {
        assert_eq!(Language::En.day_name(2), "Wednesday");
        assert_eq!(Language::Uk.day_name(0), "Понеділок");
        assert_eq!(Language::En.day_name(7), "");
    }
}
