//! Kanban board domain.
//!
//! Everything here is synchronous and free of any rendering concerns:
//!
//! - [`task`] - task records, statuses and priorities
//! - [`store`] - the in-memory task list and its change notifications
//! - [`stats`] - derived summary counters
//! - [`drag`] - drag-and-drop reassignment state machine
//! - [`form`] - create/edit draft buffer
//! - [`dashboard`] - orchestrator tying the pieces together
//! - [`sample`] - demo data

pub mod dashboard;
pub mod drag;
pub mod form;
pub mod sample;
pub mod stats;
pub mod store;
pub mod task;

pub use dashboard::{Dashboard, Lane};
pub use drag::{DragController, DragState};
pub use form::{FormDraft, FormSubmission, TaskForm};
pub use stats::BoardStats;
pub use store::{StoreEvent, TaskStore};
pub use task::{Priority, Status, Task, TaskDraft, TaskId};
