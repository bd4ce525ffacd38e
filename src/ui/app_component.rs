//! Root component: routes terminal events to the components and applies the
//! resulting actions to the [`Dashboard`].

use crate::board::stats::local_now;
use crate::board::{Dashboard, StoreEvent};
use crate::config::Config;
use crate::constants::{
    ERROR_THEME_PERSIST_FAILED, SUCCESS_TASK_CREATED, SUCCESS_TASK_MOVED, SUCCESS_TASK_UPDATED,
    SUCCESS_THEME_SWITCHED,
};
use crate::logger::Logger;
use crate::theme::ThemePreference;
use crate::ui::components::{
    BoardComponent, DialogComponent, HeaderComponent, StatsComponent, StatusBar, TaskFormComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component, ViewContext,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    stats: StatsComponent,
    board: BoardComponent,
    form: TaskFormComponent,
    dialog: DialogComponent,

    // Application state
    dashboard: Dashboard,
    theme: ThemePreference,
    context: ViewContext,
    store_events: mpsc::UnboundedReceiver<StoreEvent>,
    status_message: Option<String>,

    // Services
    logger: Logger,
    mouse_enabled: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(mut dashboard: Dashboard, theme: ThemePreference, logger: Logger, config: &Config) -> Self {
        let store_events = dashboard.subscribe();
        let context = ViewContext::new(config, theme.theme());

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            header: HeaderComponent::new(),
            stats: StatsComponent::new(),
            board: BoardComponent::new(),
            form: TaskFormComponent::new(),
            dialog,
            dashboard,
            theme,
            context,
            store_events,
            status_message: None,
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        };
        app.sync_component_data();
        log::info!(
            "App: started with {} tasks, {} theme",
            app.dashboard.store().len(),
            app.context.theme
        );
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Push the current snapshot and view context into every component
    fn sync_component_data(&mut self) {
        self.context.now = local_now();
        self.context.set_theme(self.theme.theme());

        self.header.update_context(self.context.clone());
        self.stats.update_context(self.context.clone());
        self.board.update_context(self.context.clone());
        self.dialog.set_palette(self.context.palette);

        self.stats.update_data(self.dashboard.stats_at(self.context.now));
        self.board
            .update_data(self.dashboard.lanes(), self.dashboard.dragging().cloned());
    }

    /// Drain store notifications. Returns whether anything changed.
    pub fn process_store_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.store_events.try_recv() {
            log::debug!("App: store event {:?}", event);
            let message = match &event {
                StoreEvent::TaskAdded(_) => SUCCESS_TASK_CREATED.to_string(),
                StoreEvent::TaskUpdated(_) => SUCCESS_TASK_UPDATED.to_string(),
                StoreEvent::TaskMoved { to, .. } => format!("{} to {}", SUCCESS_TASK_MOVED, to.label()),
            };
            self.status_message = Some(message);
            changed = true;
        }
        if changed {
            self.sync_component_data();
        }
        changed
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('i') => Action::CycleIcons,
            KeyCode::Char('?') => {
                log::debug!("Global key: '?' - opening help dialog");
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                log::debug!("Global key: 'G' - opening logs dialog");
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, even from a modal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.dashboard.form().is_open() {
            let today = self.context.today();
            return self.form.handle_key(key, self.dashboard.form_mut(), today);
        }

        match self.board.handle_key_events(key) {
            Action::None if !self.board.is_moving() => self.handle_global_key(key),
            action => action,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }

        if self.dashboard.form().is_open() {
            return self.form.handle_mouse(mouse);
        }

        match self.header.handle_mouse_events(mouse) {
            Action::None => self.board.handle_mouse_events(mouse),
            action => action,
        }
    }

    /// Process one terminal event to completion
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => {
                // Messages live until the next key press
                self.status_message = None;
                self.handle_key(key)
            }
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Tick => {
                // Keeps overdue counts honest across midnight
                self.sync_component_data();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
        self.process_store_events();
    }

    /// Let components react to an action, then apply what's left
    pub fn dispatch(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        let action = self.board.update(action);
        let action = self.dialog.update(action);
        self.handle_app_action(action);
    }

    /// Handle app-level actions that require business logic
    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::OpenNewTask => {
                self.dashboard.cancel_drag();
                self.dashboard.open_new_task_form();
                self.form.reset();
            }
            Action::OpenTask(id) => {
                // A click ends the gesture before the form takes over
                self.dashboard.cancel_drag();
                if self.dashboard.open_task(&id) {
                    self.form.reset();
                    self.board.select_task(&id);
                }
            }
            Action::SubmitForm => {
                if let Some(task) = self.dashboard.submit_form() {
                    self.board.select_task(&task.id);
                    self.form.reset();
                }
            }
            Action::CloseForm => {
                self.dashboard.close_form();
                self.form.reset();
            }
            Action::BeginDrag(id) => {
                if self.dashboard.begin_drag(&id) {
                    log::debug!("App: picked up task {}", id);
                }
            }
            Action::DropOnLane(status) => {
                let moved_id = self.dashboard.dragging().cloned();
                if !self.dashboard.drop_on(status) {
                    log::debug!("App: drop on {} left the board unchanged", status);
                }
                if let Some(id) = moved_id {
                    // Sync first so the cursor can follow the card into its new lane
                    self.sync_component_data();
                    self.board.select_task(&id);
                }
            }
            Action::CancelDrag => {
                self.dashboard.cancel_drag();
            }
            Action::ToggleTheme => match self.theme.toggle() {
                Ok(theme) => {
                    self.status_message = Some(format!("{} {}", SUCCESS_THEME_SWITCHED, theme));
                }
                Err(e) => {
                    log::warn!("Theme: {:#}", e);
                    self.status_message = Some(ERROR_THEME_PERSIST_FAILED.to_string());
                }
            },
            Action::CycleIcons => {
                self.context.icons.cycle_icon_theme();
                log::info!("Icons: switched to {:?}", self.context.icons.theme());
            }
            Action::ShowDialog(_) | Action::HideDialog => {}
            Action::NextTask | Action::PreviousTask | Action::NextLane | Action::PreviousLane => {}
            Action::None => {}
        }
        self.sync_component_data();
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.context.palette;
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
            rect,
        );

        let areas = LayoutManager::main_layout(rect);
        self.header.render(f, areas.header);
        self.stats.render(f, areas.stats);
        self.board.render(f, areas.board);
        StatusBar::render(
            f,
            areas.status,
            self.status_message.as_deref(),
            self.board.is_moving(),
            &palette,
        );

        if self.dashboard.form().is_open() {
            self.form.render(f, rect, self.dashboard.form(), &self.context);
        }

        // Dialogs go last so they sit above everything
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
