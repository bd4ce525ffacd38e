//! Layout management and calculations

use crate::constants::{CARD_HEIGHT, HEADER_HEIGHT, STATS_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the dashboard, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub stats: Rect,
    pub board: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header, stat cards, lanes and status bar stacked vertically
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(STATS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            stats: chunks[1],
            board: chunks[2],
            status: chunks[3],
        }
    }

    /// Split the board into four equal lanes, left to right
    #[must_use]
    pub fn lane_layout(area: Rect) -> [Rect; 4] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }

    /// Split the stats row into four equal cards
    #[must_use]
    pub fn stats_layout(area: Rect) -> [Rect; 4] {
        Self::lane_layout(area)
    }

    /// Card slots inside a lane body, starting at `first`.
    ///
    /// Only cards that fit completely are returned.
    #[must_use]
    pub fn card_slots(area: Rect, first: usize, count: usize) -> Vec<(usize, Rect)> {
        let visible = (area.height / CARD_HEIGHT) as usize;
        (first..count)
            .take(visible)
            .enumerate()
            .map(|(slot, index)| {
                let y = area.y + slot as u16 * CARD_HEIGHT;
                (index, Rect::new(area.x, y, area.width, CARD_HEIGHT))
            })
            .collect()
    }

    /// Number of whole cards that fit in a lane body
    #[must_use]
    pub fn visible_cards(area: Rect) -> usize {
        (area.height / CARD_HEIGHT) as usize
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 80 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 70 };
        (help_width, help_height)
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }
}
