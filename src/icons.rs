//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::board::{Priority, Status};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Lane header icons
#[derive(Debug, Clone)]
pub struct LaneIcons {
    pub todo: &'static str,
    pub in_progress: &'static str,
    pub done: &'static str,
    pub completed: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub urgent: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Stat card icons
#[derive(Debug, Clone)]
pub struct StatIcons {
    pub total: &'static str,
    pub completed: &'static str,
    pub in_progress: &'static str,
    pub overdue: &'static str,
}

/// Card metadata and chrome icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub due_date: &'static str,
    pub assignee: &'static str,
    pub unassigned: &'static str,
    pub add: &'static str,
    pub drag: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub lane: LaneIcons,
    pub priority: PriorityIcons,
    pub stats: StatIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            lane: LaneIcons {
                todo: "📋",
                in_progress: "🚧",
                done: "📦",
                completed: "✅",
            },
            priority: PriorityIcons {
                urgent: "🔴",
                high: "🟠",
                medium: "🟡",
                low: "⚪",
            },
            stats: StatIcons {
                total: "📊",
                completed: "✅",
                in_progress: "⏳",
                overdue: "⚠️",
            },
            ui: UiIcons {
                due_date: "📅",
                assignee: "👤",
                unassigned: "👤",
                add: "➕",
                drag: "✋",
                light_mode: "☀️",
                dark_mode: "🌙",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            lane: LaneIcons {
                todo: "○",
                in_progress: "◐",
                done: "◉",
                completed: "●",
            },
            priority: PriorityIcons {
                urgent: "⚑",
                high: "▲",
                medium: "■",
                low: "▼",
            },
            stats: StatIcons {
                total: "▤",
                completed: "✓",
                in_progress: "◷",
                overdue: "⚠",
            },
            ui: UiIcons {
                due_date: "◷",
                assignee: "●",
                unassigned: "○",
                add: "+",
                drag: "⇄",
                light_mode: "☀",
                dark_mode: "☾",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            lane: LaneIcons {
                todo: "[ ]",
                in_progress: "[~]",
                done: "[x]",
                completed: "[X]",
            },
            priority: PriorityIcons {
                urgent: "!!",
                high: "!",
                medium: "=",
                low: "-",
            },
            stats: StatIcons {
                total: "#",
                completed: "+",
                in_progress: "~",
                overdue: "!",
            },
            ui: UiIcons {
                due_date: "@",
                assignee: "&",
                unassigned: "?",
                add: "+",
                drag: ">",
                light_mode: "L",
                dark_mode: "D",
            },
        }
    }

    #[must_use]
    pub fn lane(&self, status: Status) -> &'static str {
        let icons = self.icons().lane;
        match status {
            Status::Todo => icons.todo,
            Status::InProgress => icons.in_progress,
            Status::Done => icons.done,
            Status::Completed => icons.completed,
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::Urgent => icons.urgent,
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    #[must_use]
    pub fn stats(&self) -> StatIcons {
        self.icons().stats
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().ui.due_date
    }

    #[must_use]
    pub fn assignee(&self, assigned: bool) -> &'static str {
        let ui = self.icons().ui;
        if assigned {
            ui.assignee
        } else {
            ui.unassigned
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().ui.add
    }

    #[must_use]
    pub fn drag(&self) -> &'static str {
        self.icons().ui.drag
    }

    /// Icon for the theme toggle: shows what the toggle switches to
    #[must_use]
    pub fn theme_toggle(&self, current: Theme) -> &'static str {
        let ui = self.icons().ui;
        if current.is_dark() {
            ui.light_mode
        } else {
            ui.dark_mode
        }
    }
}
