//! One task summary card inside a lane.

use crate::board::stats::is_overdue;
use crate::board::Task;
use crate::ui::components::badge::{create_priority_badge, create_tag_badges, priority_color};
use crate::ui::core::ViewContext;
use crate::utils::datetime::format_relative_date;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// How a card is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHighlight {
    #[default]
    None,
    /// Keyboard cursor is on this card
    Selected,
    /// This card is being moved
    InFlight,
}

pub struct TaskCardComponent<'a> {
    task: &'a Task,
    highlight: CardHighlight,
}

impl<'a> TaskCardComponent<'a> {
    pub fn new(task: &'a Task, highlight: CardHighlight) -> Self {
        Self { task, highlight }
    }

    /// Priority badge and title
    fn title_line(&self, ctx: &ViewContext) -> Line<'static> {
        let mut title_style = Style::default().fg(ctx.palette.foreground).add_modifier(Modifier::BOLD);
        if self.highlight == CardHighlight::InFlight {
            title_style = title_style.add_modifier(Modifier::DIM);
        }

        Line::from(vec![
            create_priority_badge(self.task.priority, &ctx.icons, &ctx.palette),
            Span::raw(" "),
            Span::styled(self.task.title.clone(), title_style),
        ])
    }

    /// First line of the description, when enabled
    fn description_line(&self, ctx: &ViewContext) -> Line<'static> {
        let excerpt = if ctx.display.show_descriptions {
            self.task
                .description
                .as_deref()
                .and_then(|d| d.lines().next())
                .unwrap_or_default()
                .to_string()
        } else {
            String::new()
        };
        Line::from(Span::styled(excerpt, Style::default().fg(ctx.palette.muted)))
    }

    fn tags_line(&self, ctx: &ViewContext) -> Line<'static> {
        Line::from(create_tag_badges(self.task.tags(), ctx.max_card_tags, &ctx.palette))
    }

    /// Due date on the left of the bottom border, assignee initials on the right
    fn footer(&self, ctx: &ViewContext) -> (Option<Line<'static>>, Option<Line<'static>>) {
        let due = self.task.due_date.map(|date| {
            let label = format_relative_date(date, ctx.today(), &ctx.display.date_format);
            let color = if is_overdue(self.task, ctx.now) {
                ctx.palette.destructive
            } else {
                ctx.palette.muted
            };
            Line::from(Span::styled(
                format!(" {} {} ", ctx.icons.due_date(), label),
                Style::default().fg(color),
            ))
        });

        let assignee = if ctx.display.show_assignees {
            let initials = self.task.assignee_initials();
            let icon = ctx.icons.assignee(initials.is_some());
            Some(Line::from(Span::styled(
                format!(" {} {} ", icon, initials.unwrap_or_default()),
                Style::default().fg(ctx.palette.primary),
            )))
        } else {
            None
        };

        (due, assignee)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let border_color = match self.highlight {
            CardHighlight::Selected => ctx.palette.selection,
            CardHighlight::InFlight => ctx.palette.muted,
            CardHighlight::None => priority_color(self.task.priority, &ctx.palette),
        };
        let border_type = match self.highlight {
            CardHighlight::Selected => BorderType::Thick,
            CardHighlight::InFlight => BorderType::Double,
            CardHighlight::None => BorderType::Rounded,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color));

        if self.highlight == CardHighlight::InFlight {
            block = block.title(Line::from(format!(" {} ", ctx.icons.drag())).alignment(Alignment::Right));
        }

        let (due, assignee) = self.footer(ctx);
        if let Some(due) = due {
            block = block.title_bottom(due.alignment(Alignment::Left));
        }
        if let Some(assignee) = assignee {
            block = block.title_bottom(assignee.alignment(Alignment::Right));
        }

        let lines = vec![self.title_line(ctx), self.description_line(ctx), self.tags_line(ctx)];
        let card = Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(ctx.palette.background));

        f.render_widget(card, area);
    }
}
