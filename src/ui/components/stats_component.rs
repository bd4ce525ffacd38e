use crate::board::BoardStats;
use crate::constants::{STAT_COMPLETED, STAT_IN_PROGRESS, STAT_NEEDS_ATTENTION, STAT_OVERDUE, STAT_TOTAL};
use crate::ui::components::badge::create_highlight_badge;
use crate::ui::core::{actions::Action, Component, ViewContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Summary counters drawn as four cards above the lanes
pub struct StatsComponent {
    pub stats: BoardStats,
    pub context: ViewContext,
}

impl Default for StatsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsComponent {
    pub fn new() -> Self {
        Self {
            stats: BoardStats::default(),
            context: ViewContext::default(),
        }
    }

    pub fn update_data(&mut self, stats: BoardStats) {
        self.stats = stats;
    }

    pub fn update_context(&mut self, context: ViewContext) {
        self.context = context;
    }

    fn stat_card(
        &self,
        icon: &str,
        title: &str,
        value: usize,
        color: Color,
        badge: Option<Span<'static>>,
    ) -> Paragraph<'static> {
        let palette = &self.context.palette;
        let mut value_line = vec![Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if let Some(badge) = badge {
            value_line.push(Span::raw(" "));
            value_line.push(badge);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" {icon} {title} "),
                Style::default().fg(palette.muted),
            ))
            .style(Style::default().bg(palette.background));

        Paragraph::new(vec![Line::from(value_line)]).block(block)
    }
}

impl Component for StatsComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.context.palette;
        let icons = self.context.icons.stats();
        let areas = LayoutManager::stats_layout(rect);

        let done_badge = create_highlight_badge(
            &format!("{}% done", self.stats.completion_percent()),
            palette.accent,
            &palette,
        );
        let attention_badge = self
            .stats
            .needs_attention()
            .then(|| create_highlight_badge(STAT_NEEDS_ATTENTION, palette.destructive, &palette));

        let cards = [
            self.stat_card(icons.total, STAT_TOTAL, self.stats.total, palette.foreground, None),
            self.stat_card(
                icons.completed,
                STAT_COMPLETED,
                self.stats.completed,
                palette.accent,
                Some(done_badge),
            ),
            self.stat_card(
                icons.in_progress,
                STAT_IN_PROGRESS,
                self.stats.in_progress,
                palette.primary,
                None,
            ),
            self.stat_card(
                icons.overdue,
                STAT_OVERDUE,
                self.stats.overdue,
                palette.destructive,
                attention_badge,
            ),
        ];

        for (card, area) in cards.into_iter().zip(areas) {
            f.render_widget(card, area);
        }
    }
}
