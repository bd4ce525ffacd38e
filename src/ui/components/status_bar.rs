//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::constants::{STATUS_DRAGGING, STATUS_HINTS};
use crate::theme::Palette;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Transient message wins; otherwise shortcuts for the current mode
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>, moving: bool, palette: &Palette) {
        let (status_text, status_color) = match message {
            Some(message) if message.starts_with('❌') => (message, palette.destructive),
            Some(message) => (message, palette.accent),
            None if moving => (STATUS_DRAGGING, palette.warning),
            None => (STATUS_HINTS, palette.muted),
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
