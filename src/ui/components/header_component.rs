//! Title row with the "New Task" button and the theme toggle.

use crate::constants::{APP_SUBTITLE, APP_TITLE};
use crate::ui::core::{actions::Action, Component, ViewContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct HeaderComponent {
    pub context: ViewContext,
    new_task_area: Rect,
    theme_area: Rect,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            context: ViewContext::default(),
            new_task_area: Rect::default(),
            theme_area: Rect::default(),
        }
    }

    pub fn update_context(&mut self, context: ViewContext) {
        self.context = context;
    }

    fn new_task_label(&self) -> String {
        format!("[{} New Task]", self.context.icons.add())
    }

    fn theme_label(&self) -> String {
        let target = self.context.theme.toggled();
        format!("[{} {}]", self.context.icons.theme_toggle(self.context.theme), target)
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if LayoutManager::contains(self.new_task_area, mouse.column, mouse.row) {
            Action::OpenNewTask
        } else if LayoutManager::contains(self.theme_area, mouse.column, mouse.row) {
            Action::ToggleTheme
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = &self.context.palette;

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(palette.muted))),
        ]);
        f.render_widget(title, rect);

        // Buttons are right-aligned on the first row: [theme] [new task]
        let new_task = self.new_task_label();
        let theme = self.theme_label();
        let new_width = Span::raw(new_task.as_str()).width() as u16;
        let theme_width = Span::raw(theme.as_str()).width() as u16;

        let right = rect.x + rect.width;
        self.new_task_area = Rect::new(right.saturating_sub(new_width), rect.y, new_width, 1);
        self.theme_area = Rect::new(
            right.saturating_sub(new_width + 1 + theme_width),
            rect.y,
            theme_width,
            1,
        );

        f.render_widget(
            Paragraph::new(Span::styled(
                new_task,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            self.new_task_area,
        );
        f.render_widget(
            Paragraph::new(Span::styled(theme, Style::default().fg(palette.foreground))),
            self.theme_area,
        );
    }
}
