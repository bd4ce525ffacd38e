//! Board orchestrator.
//!
//! Owns the [`TaskStore`], the [`DragController`] and the [`TaskForm`] and
//! wires them together: drops become `move_task`, submits become `add_task`
//! or `update_task`.

use super::drag::DragController;
use super::form::TaskForm;
use super::stats::BoardStats;
use super::store::{StoreEvent, TaskStore};
use super::task::{Status, Task, TaskId};
use chrono::NaiveDateTime;
use tokio::sync::mpsc;

/// Snapshot of one lane for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub status: Status,
    pub title: &'static str,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    store: TaskStore,
    drag: DragController,
    form: TaskForm,
}

impl Dashboard {
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            drag: DragController::new(),
            form: TaskForm::new(),
        }
    }

    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self::new(TaskStore::with_tasks(tasks))
    }

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        self.store.subscribe()
    }

    #[must_use]
    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// The four lanes in board order
    #[must_use]
    pub fn lanes(&self) -> [Lane; 4] {
        Status::ALL.map(|status| Lane {
            status,
            title: status.label(),
            tasks: self.store.tasks_by_status(status).into_iter().cloned().collect(),
        })
    }

    #[must_use]
    pub fn tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.store.tasks_by_status(status)
    }

    #[must_use]
    pub fn stats(&self) -> BoardStats {
        self.store.compute_stats()
    }

    #[must_use]
    pub fn stats_at(&self, now: NaiveDateTime) -> BoardStats {
        self.store.compute_stats_at(now)
    }

    /// Open the form for a brand new task
    pub fn open_new_task_form(&mut self) {
        log::info!("Dashboard: opening form for a new task");
        self.form.open_create();
    }

    /// Open the form for an existing task. Unknown ids leave the form closed.
    pub fn open_task(&mut self, id: &TaskId) -> bool {
        match self.store.get(id) {
            Some(task) => {
                log::info!("Dashboard: editing task {} '{}'", task.id, task.title);
                self.form.open_edit(task);
                true
            }
            None => {
                log::debug!("Dashboard: cannot edit unknown task {}", id);
                false
            }
        }
    }

    pub fn close_form(&mut self) {
        log::debug!("Dashboard: form dismissed");
        self.form.close();
    }

    /// Commit the form. Returns the created or updated task.
    pub fn submit_form(&mut self) -> Option<Task> {
        let submission = self.form.submit()?;
        match submission.target {
            Some(id) => self.store.update_task(&id, submission.draft),
            None => Some(self.store.add_task(submission.draft)),
        }
    }

    /// Pick up a card. An unknown id still ends any stale transfer.
    pub fn begin_drag(&mut self, id: &TaskId) -> bool {
        if self.store.get(id).is_none() {
            self.drag.cancel_transfer();
            return false;
        }
        self.drag.begin_transfer(id.clone());
        true
    }

    /// Drop the in-flight card on `status`. Returns whether it moved.
    pub fn drop_on(&mut self, status: Status) -> bool {
        self.drag.complete_transfer(&mut self.store, status)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel_transfer();
    }

    #[must_use]
    pub fn dragging(&self) -> Option<&TaskId> {
        self.drag.in_flight()
    }
}
