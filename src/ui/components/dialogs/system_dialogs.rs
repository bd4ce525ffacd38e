use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::theme::Palette;
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::dialogs::scroll_behavior::DialogScroll;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub const HELP_TEXT: &str = "\
TASKBOARD - Kanban task dashboard

NAVIGATION
----------
h/l  ←/→    Move between lanes
j/k  ↓/↑    Move between cards
Enter  e    Edit selected card

TASKS
-----
a           Create new task
+           (mouse) Create task from a lane header
m  Space    Pick up selected card
h/l         Choose target lane while moving
m  Enter    Drop card on the chosen lane
Esc         Cancel the move

MOUSE
-----
Click       Open card in the edit form
Drag        Move card to another lane
Release     Outside the lanes cancels the move

FORM
----
Tab  ↓      Next field
S-Tab  ↑    Previous field
←/→         Change status, priority or due date
t           Due date today (on the due date field)
Backspace   Clear due date / remove last tag
Enter       Add tag (tags field) or save
Ctrl+S      Save
Esc         Discard changes

APPEARANCE
----------
t           Toggle light/dark theme
i           Cycle icon set

GENERAL
-------
?           Toggle this help
G           Show logs
q  Ctrl+C   Quit
";

/// Lines of `content` that fit, plus a scrollbar when they don't
fn render_scrollable_lines(
    f: &mut Frame,
    content_area: Rect,
    lines: Vec<Line<'static>>,
    scroll: &mut DialogScroll,
    palette: &Palette,
) {
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();
    f.render_widget(List::new(items), content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(palette.muted))
            .thumb_style(Style::default().fg(palette.foreground));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}

/// Split a dialog into its content area and the instructions line
fn dialog_regions(dialog_area: Rect) -> (Rect, Rect) {
    let inner = dialog_area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let content = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let instructions = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    (content, instructions)
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll, palette: &Palette) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, dialog_area);

    f.render_widget(create_dialog_block(" ? Help ", palette.warning, palette), dialog_area);
    let (content_area, instructions_area) = dialog_regions(dialog_area);

    let lines = HELP_TEXT
        .lines()
        .map(|line| {
            let is_heading = !line.is_empty() && line.chars().all(|c| c.is_uppercase() || c == ' ');
            let style = if is_heading {
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            };
            Line::from(Span::styled(line.to_string(), style))
        })
        .collect();
    render_scrollable_lines(f, content_area, lines, scroll, palette);

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE], palette),
        instructions_area,
    );
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll, palette: &Palette) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    f.render_widget(
        create_dialog_block(DIALOG_TITLE_DEBUG_LOGS, palette.primary, palette),
        dialog_area,
    );
    let (content_area, instructions_area) = dialog_regions(dialog_area);

    if logs.is_empty() {
        let no_logs = Paragraph::new("No logs available")
            .style(Style::default().fg(palette.muted))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(no_logs, content_area);
    } else {
        let lines = logs
            .iter()
            .map(|log| {
                // Color code based on level
                let style = if log.contains("[ERROR]") {
                    Style::default().fg(palette.destructive)
                } else if log.contains("[WARN]") {
                    Style::default().fg(palette.warning)
                } else if log.contains("[DEBUG]") {
                    Style::default().fg(palette.muted)
                } else {
                    Style::default().fg(palette.foreground)
                };
                Line::from(Span::styled(log.clone(), style))
            })
            .collect();
        render_scrollable_lines(f, content_area, lines, scroll, palette);
    }

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE], palette),
        instructions_area,
    );
}
