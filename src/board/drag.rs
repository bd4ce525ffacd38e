//! Drag-and-drop reassignment, independent of any input system.
//!
//! A gesture begins with [`DragController::begin_transfer`] on a card and ends
//! either with [`DragController::complete_transfer`] on a lane or with
//! [`DragController::cancel_transfer`] when released anywhere else. Both
//! endings return the controller to [`DragState::Idle`].

use super::store::TaskStore;
use super::task::{Status, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// One task is in flight; the transfer is always a move
    Dragging(TaskId),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The task currently in flight, if any
    #[must_use]
    pub fn in_flight(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Every lane accepts drops
    #[must_use]
    pub fn accepts_drop(&self, _target: Status) -> bool {
        true
    }

    /// Start carrying `task_id`. A stale in-flight reference is replaced.
    pub fn begin_transfer(&mut self, task_id: TaskId) {
        if let DragState::Dragging(previous) = &self.state {
            log::debug!("Drag: replacing stale transfer of {}", previous);
        }
        log::debug!("Drag: begin transfer of {}", task_id);
        self.state = DragState::Dragging(task_id);
    }

    /// Drop onto `target`. Returns whether the in-flight task changed lanes.
    pub fn complete_transfer(&mut self, store: &mut TaskStore, target: Status) -> bool {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging(task_id) = state else {
            log::debug!("Drag: drop on {} with nothing in flight", target);
            return false;
        };
        if !self.accepts_drop(target) {
            return false;
        }
        match store.get(&task_id).map(|task| task.status) {
            Some(current) if current != target => store.move_task(&task_id, target),
            Some(_) => {
                log::debug!("Drag: {} dropped on its own lane {}", task_id, target);
                false
            }
            None => {
                log::debug!("Drag: in-flight task {} no longer exists", task_id);
                false
            }
        }
    }

    /// Abandon the gesture without touching the store
    pub fn cancel_transfer(&mut self) {
        if let DragState::Dragging(task_id) = std::mem::take(&mut self.state) {
            log::debug!("Drag: cancelled transfer of {}", task_id);
        }
    }
}
