//! The four-lane board: keyboard selection, the keyboard move cursor and
//! mouse drag gestures.

use crate::board::{Lane, Status, TaskId};
use crate::ui::components::lane_component::{LaneComponent, LaneView};
use crate::ui::core::{actions::Action, Component, ViewContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Left button held down on a card
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPress {
    task_id: TaskId,
    moved: bool,
}

pub struct BoardComponent {
    lanes: [Lane; 4],
    lane_views: [LaneComponent; 4],
    pub selected_lane: usize,
    selected_cards: [usize; 4],
    in_flight: Option<TaskId>,
    pending_press: Option<PendingPress>,
    pub context: ViewContext,
}

impl Default for BoardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardComponent {
    pub fn new() -> Self {
        Self {
            lanes: Status::ALL.map(|status| Lane {
                status,
                title: status.label(),
                tasks: Vec::new(),
            }),
            lane_views: Status::ALL.map(LaneComponent::new),
            selected_lane: 0,
            selected_cards: [0; 4],
            in_flight: None,
            pending_press: None,
            context: ViewContext::default(),
        }
    }

    /// Refresh from a dashboard snapshot
    pub fn update_data(&mut self, lanes: [Lane; 4], in_flight: Option<TaskId>) {
        self.lanes = lanes;
        self.in_flight = in_flight;
        if self.in_flight.is_none() {
            self.pending_press = None;
        }
        self.clamp_selection();
    }

    pub fn update_context(&mut self, context: ViewContext) {
        self.context = context;
    }

    pub fn lanes(&self) -> &[Lane; 4] {
        &self.lanes
    }

    pub fn is_moving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Lane the keyboard cursor is in
    pub fn selected_status(&self) -> Status {
        Status::ALL[self.selected_lane]
    }

    pub fn selected_card_index(&self) -> Option<usize> {
        let lane = &self.lanes[self.selected_lane];
        if lane.tasks.is_empty() {
            None
        } else {
            Some(self.selected_cards[self.selected_lane])
        }
    }

    pub fn selected_task_id(&self) -> Option<&TaskId> {
        self.selected_card_index()
            .and_then(|index| self.lanes[self.selected_lane].tasks.get(index))
            .map(|task| &task.id)
    }

    /// Put the keyboard cursor on a task, wherever it lives
    pub fn select_task(&mut self, id: &TaskId) {
        for (lane_index, lane) in self.lanes.iter().enumerate() {
            if let Some(card) = lane.tasks.iter().position(|task| &task.id == id) {
                self.selected_lane = lane_index;
                self.selected_cards[lane_index] = card;
                return;
            }
        }
    }

    fn clamp_selection(&mut self) {
        for (lane, card) in self.lanes.iter().zip(self.selected_cards.iter_mut()) {
            *card = (*card).min(lane.tasks.len().saturating_sub(1));
        }
    }

    fn next_task(&mut self) {
        let len = self.lanes[self.selected_lane].tasks.len();
        let card = &mut self.selected_cards[self.selected_lane];
        if len > 0 && *card + 1 < len {
            *card += 1;
        }
    }

    fn previous_task(&mut self) {
        let card = &mut self.selected_cards[self.selected_lane];
        *card = card.saturating_sub(1);
    }

    fn next_lane(&mut self) {
        self.selected_lane = (self.selected_lane + 1).min(Status::ALL.len() - 1);
    }

    fn previous_lane(&mut self) {
        self.selected_lane = self.selected_lane.saturating_sub(1);
    }

    fn lane_at(&self, column: u16, row: u16) -> Option<usize> {
        self.lane_views.iter().position(|lane| lane.contains(column, row))
    }

    /// Keys while a card is picked up: the cursor chooses the drop lane
    fn handle_move_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousLane,
            KeyCode::Right | KeyCode::Char('l') => Action::NextLane,
            KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Enter => {
                Action::DropOnLane(self.selected_status())
            }
            KeyCode::Esc => Action::CancelDrag,
            _ => Action::None,
        }
    }

    fn handle_mouse_down(&mut self, column: u16, row: u16) -> Action {
        let Some(lane_index) = self.lane_at(column, row) else {
            return Action::None;
        };
        let lane = &self.lane_views[lane_index];

        if lane.hits_add(column, row) {
            return Action::OpenNewTask;
        }

        match lane.card_at(column, row) {
            Some((card, id)) => {
                let id = id.clone();
                self.selected_lane = lane_index;
                self.selected_cards[lane_index] = card;
                self.pending_press = Some(PendingPress {
                    task_id: id.clone(),
                    moved: false,
                });
                Action::BeginDrag(id)
            }
            None => {
                self.selected_lane = lane_index;
                Action::None
            }
        }
    }

    fn handle_mouse_drag(&mut self, column: u16, row: u16) -> Action {
        if let Some(press) = self.pending_press.as_mut() {
            press.moved = true;
            if let Some(lane_index) = self.lane_at(column, row) {
                self.selected_lane = lane_index;
            }
        }
        Action::None
    }

    fn handle_mouse_up(&mut self, column: u16, row: u16) -> Action {
        let Some(press) = self.pending_press.take() else {
            return Action::None;
        };

        if !press.moved {
            // A click: open the card instead of moving it
            return Action::OpenTask(press.task_id);
        }

        match self.lane_at(column, row) {
            Some(lane_index) => {
                self.selected_lane = lane_index;
                Action::DropOnLane(Status::ALL[lane_index])
            }
            None => Action::CancelDrag,
        }
    }
}

impl Component for BoardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_moving() {
            return self.handle_move_keys(key);
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Right | KeyCode::Char('l') => Action::NextLane,
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousLane,
            KeyCode::Char('a') => Action::OpenNewTask,
            KeyCode::Enter | KeyCode::Char('e') => match self.selected_task_id() {
                Some(id) => Action::OpenTask(id.clone()),
                None => Action::None,
            },
            KeyCode::Char('m') | KeyCode::Char(' ') => match self.selected_task_id() {
                Some(id) => Action::BeginDrag(id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_mouse_drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.handle_mouse_up(mouse.column, mouse.row),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.next_task();
                Action::None
            }
            Action::PreviousTask => {
                self.previous_task();
                Action::None
            }
            Action::NextLane => {
                self.next_lane();
                Action::None
            }
            Action::PreviousLane => {
                self.previous_lane();
                Action::None
            }
            Action::CancelDrag => {
                self.pending_press = None;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::lane_layout(rect);
        let moving = self.in_flight.is_some();

        for (index, (lane_view, lane)) in self.lane_views.iter_mut().zip(self.lanes.iter()).enumerate() {
            let selected_here = index == self.selected_lane;
            let view = LaneView {
                selected: if selected_here && !moving && !lane.tasks.is_empty() {
                    Some(self.selected_cards[index])
                } else {
                    None
                },
                in_flight: self.in_flight.as_ref(),
                drop_target: moving && selected_here,
            };
            lane_view.render(f, areas[index], lane, view, &self.context);
        }
    }
}
