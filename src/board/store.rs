//! In-memory task store.
//!
//! The store exclusively owns the task list. Views read snapshots and learn
//! about changes through [`StoreEvent`]s delivered on subscription channels.

use super::stats::{local_now, BoardStats};
use super::task::{Status, Task, TaskDraft, TaskId};
use chrono::NaiveDateTime;
use tokio::sync::mpsc;

/// Change notification published after every successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TaskAdded(TaskId),
    TaskUpdated(TaskId),
    TaskMoved { id: TaskId, from: Status, to: Status },
}

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    subscribers: Vec<mpsc::UnboundedSender<StoreEvent>>,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing tasks. Later duplicates of an id are dropped.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            if store.get(&task.id).is_some() {
                log::warn!("Store: ignoring seeded task with duplicate id {}", task.id);
                continue;
            }
            store.tasks.push(task);
        }
        store
    }

    /// Register an observer. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a new task built from `draft` under a fresh id
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let task = Task::from_draft(self.fresh_id(), draft);
        log::info!("Store: added task {} '{}' to {}", task.id, task.title, task.status);
        self.tasks.push(task.clone());
        self.notify(StoreEvent::TaskAdded(task.id.clone()));
        task
    }

    /// Replace all fields of the task with `id`. Returns `None` if no such task exists.
    pub fn update_task(&mut self, id: &TaskId, draft: TaskDraft) -> Option<Task> {
        let Some(task) = self.get_mut(id) else {
            log::debug!("Store: update ignored, unknown task {}", id);
            return None;
        };
        task.apply(draft);
        let updated = task.clone();
        log::info!("Store: updated task {} '{}'", updated.id, updated.title);
        self.notify(StoreEvent::TaskUpdated(updated.id.clone()));
        Some(updated)
    }

    /// Set the status of a task. Only a real change mutates and notifies.
    pub fn move_task(&mut self, id: &TaskId, status: Status) -> bool {
        let Some(task) = self.get_mut(id) else {
            log::debug!("Store: move ignored, unknown task {}", id);
            return false;
        };
        if task.status == status {
            return false;
        }
        let from = task.status;
        task.status = status;
        log::info!("Store: moved task {} from {} to {}", id, from, status);
        self.notify(StoreEvent::TaskMoved {
            id: id.clone(),
            from,
            to: status,
        });
        true
    }

    /// Tasks in one lane, in insertion order
    #[must_use]
    pub fn tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.status == status).collect()
    }

    #[must_use]
    pub fn compute_stats(&self) -> BoardStats {
        self.compute_stats_at(local_now())
    }

    #[must_use]
    pub fn compute_stats_at(&self, now: NaiveDateTime) -> BoardStats {
        BoardStats::compute(&self.tasks, now)
    }
}
