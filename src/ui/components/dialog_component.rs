//! Read-only modal dialogs: the help panel and the log viewer.

use crate::logger::Logger;
use crate::theme::Palette;
use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll: DialogScroll,
    pub palette: Palette,
    logger: Logger,
    // Snapshot taken when the log viewer opens so lines don't shift while reading
    logs: Vec<String>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll: DialogScroll::default(),
            palette: Palette::light(),
            logger: Logger::new(),
            logs: Vec::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn show(&mut self, dialog_type: DialogType) {
        self.scroll.reset();
        if dialog_type == DialogType::Logs {
            self.logs = self.logger.get_logs();
        }
        self.dialog_type = Some(dialog_type);
    }

    fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
        self.logs.clear();
    }

    fn is_close_key(dialog_type: DialogType, code: KeyCode) -> bool {
        match dialog_type {
            DialogType::Help => matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')),
            DialogType::Logs => matches!(code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        if Self::is_close_key(dialog_type, key.code) {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll, &self.palette),
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, &self.logs, &mut self.scroll, &self.palette)
            }
            None => {}
        }
    }
}
