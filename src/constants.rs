//! Constants used throughout the application
//!
//! This module centralizes UI text and other constant values
//! to improve maintainability and consistency.

// Board header
pub const APP_TITLE: &str = "Task Dashboard";
pub const APP_SUBTITLE: &str = "Manage your projects with drag-and-drop simplicity";

// Stat card titles
pub const STAT_TOTAL: &str = "Total Tasks";
pub const STAT_COMPLETED: &str = "Completed";
pub const STAT_IN_PROGRESS: &str = "In Progress";
pub const STAT_OVERDUE: &str = "Overdue";
pub const STAT_NEEDS_ATTENTION: &str = "Needs attention";

// Lane placeholder
pub const EMPTY_LANE: &str = "No tasks yet";
pub const EMPTY_LANE_HINT: &str = "Drop a card here or press 'a'";

// Form dialog titles
pub const FORM_TITLE_CREATE: &str = "Create New Task";
pub const FORM_TITLE_EDIT: &str = "Edit Task";
pub const FORM_SUBMIT_CREATE: &str = " Create Task";
pub const FORM_SUBMIT_EDIT: &str = " Update Task";
pub const FORM_TITLE_REQUIRED: &str = "Title is required";

// Status bar messages
pub const STATUS_HINTS: &str =
    "a: new • Enter: edit • m: move • h/l: lane • j/k: card • t: theme • ?: help • q: quit";
pub const STATUS_DRAGGING: &str = "Moving card • h/l: choose lane • m/Enter: drop • Esc: cancel";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_MOVED: &str = "✅ Task moved";
pub const SUCCESS_THEME_SWITCHED: &str = "✅ Theme switched to";
pub const ERROR_THEME_PERSIST_FAILED: &str = "❌ Failed to save theme preference";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Card layout
/// Default number of tags drawn on a card
pub const CARD_TAGS_DEFAULT: usize = 3;
/// Minimum configurable number of tags on a card
pub const CARD_TAGS_MIN: usize = 1;
/// Maximum configurable number of tags on a card
pub const CARD_TAGS_MAX: usize = 10;
/// Height of a rendered card in lines, borders included
pub const CARD_HEIGHT: u16 = 5;

// Screen layout
/// Lines used by the title header
pub const HEADER_HEIGHT: u16 = 2;
/// Lines used by the stat cards row
pub const STATS_HEIGHT: u16 = 4;
/// Lines used by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;
