//! A single status lane: header with count and add affordance, then cards.

use crate::board::{Lane, Status, TaskId};
use crate::constants::{CARD_HEIGHT, EMPTY_LANE, EMPTY_LANE_HINT};
use crate::ui::components::badge::create_paren_badge;
use crate::ui::components::task_card_component::{CardHighlight, TaskCardComponent};
use crate::ui::core::ViewContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Per-frame view state handed down by the board
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneView<'a> {
    /// Card index under the keyboard cursor, if the cursor is in this lane
    pub selected: Option<usize>,
    /// Card being moved, wherever it currently lives
    pub in_flight: Option<&'a TaskId>,
    /// Lane is the current drop target
    pub drop_target: bool,
}

/// Renders one lane and remembers where it drew things for mouse hit-testing
#[derive(Debug, Clone)]
pub struct LaneComponent {
    pub status: Status,
    scroll_offset: usize,
    area: Rect,
    add_area: Rect,
    card_areas: Vec<(TaskId, Rect)>,
}

impl LaneComponent {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            scroll_offset: 0,
            area: Rect::default(),
            add_area: Rect::default(),
            card_areas: Vec::new(),
        }
    }

    /// Area of the whole lane from the last render
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        LayoutManager::contains(self.area, column, row)
    }

    /// Whether the add affordance in the header was hit
    pub fn hits_add(&self, column: u16, row: u16) -> bool {
        LayoutManager::contains(self.add_area, column, row)
    }

    /// Card under the pointer, if any
    pub fn card_at(&self, column: u16, row: u16) -> Option<(usize, &TaskId)> {
        self.card_areas
            .iter()
            .enumerate()
            .find(|(_, (_, rect))| LayoutManager::contains(*rect, column, row))
            .map(|(slot, (id, _))| (self.scroll_offset + slot, id))
    }

    /// Keep `selected` inside the visible window of `visible` cards
    fn scroll_to(&mut self, selected: Option<usize>, visible: usize) {
        let Some(selected) = selected else {
            return;
        };
        if visible == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + visible {
            self.scroll_offset = selected + 1 - visible;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, lane: &Lane, view: LaneView<'_>, ctx: &ViewContext) {
        self.area = area;
        let palette = &ctx.palette;

        let border_color = if view.drop_target {
            palette.selection
        } else if view.selected.is_some() {
            palette.primary
        } else {
            palette.border
        };

        let add_label = format!(" {} ", ctx.icons.add());
        let header = Line::from(vec![
            Span::styled(
                format!(" {} {} ", ctx.icons.lane(lane.status), lane.title),
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            ),
            create_paren_badge(&lane.tasks.len().to_string(), palette),
            Span::raw(" "),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if view.drop_target {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(border_color))
            .title(header)
            .title(
                Line::from(Span::styled(
                    add_label.clone(),
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Right),
            )
            .style(Style::default().bg(palette.background));

        let body = block.inner(area);
        f.render_widget(block, area);

        // Right-aligned title sits just inside the top-right corner
        let add_width = Span::raw(add_label.as_str()).width() as u16;
        self.add_area = Rect::new(
            (area.x + area.width).saturating_sub(add_width + 1),
            area.y,
            add_width,
            1,
        );

        self.card_areas.clear();
        if lane.tasks.is_empty() {
            self.scroll_offset = 0;
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(EMPTY_LANE, Style::default().fg(palette.muted))),
                Line::from(Span::styled(
                    EMPTY_LANE_HINT,
                    Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(placeholder, body);
            return;
        }

        let visible = LayoutManager::visible_cards(body);
        self.scroll_offset = self.scroll_offset.min(lane.tasks.len().saturating_sub(1));
        self.scroll_to(view.selected, visible);

        for (index, slot) in LayoutManager::card_slots(body, self.scroll_offset, lane.tasks.len()) {
            let task = &lane.tasks[index];
            let highlight = if view.in_flight == Some(&task.id) {
                CardHighlight::InFlight
            } else if view.selected == Some(index) {
                CardHighlight::Selected
            } else {
                CardHighlight::None
            };
            TaskCardComponent::new(task, highlight).render(f, slot, ctx);
            self.card_areas.push((task.id.clone(), slot));
        }

        let hidden = lane.tasks.len().saturating_sub(self.scroll_offset + visible);
        // Only drawn in the leftover rows below the last whole card
        if hidden > 0 && body.height % CARD_HEIGHT > 0 {
            let more = Rect::new(body.x, body.y + body.height - 1, body.width, 1);
            let indicator = Paragraph::new(format!("{hidden} more"))
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Right);
            f.render_widget(indicator, more);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconTheme;
    use ratatui::{backend::TestBackend, Terminal};

    fn empty_lane() -> Lane {
        Lane {
            status: Status::Todo,
            title: Status::Todo.label(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_add_target_matches_drawn_width() {
        let mut ctx = ViewContext::default();
        ctx.icons.set_theme(IconTheme::Emoji);
        let mut lane = LaneComponent::new(Status::Todo);

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| lane.render(f, f.area(), &empty_lane(), LaneView::default(), &ctx))
            .unwrap();

        // " ➕ " takes four cells before the top-right corner
        assert!(lane.hits_add(25, 0));
        assert!(lane.hits_add(28, 0));
        assert!(!lane.hits_add(24, 0));
        assert!(!lane.hits_add(29, 0));
    }

    #[test]
    fn test_ascii_add_target() {
        let mut ctx = ViewContext::default();
        ctx.icons.set_theme(IconTheme::Ascii);
        let mut lane = LaneComponent::new(Status::Todo);

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| lane.render(f, f.area(), &empty_lane(), LaneView::default(), &ctx))
            .unwrap();

        assert!(lane.hits_add(26, 0));
        assert!(!lane.hits_add(25, 0));
    }
}
