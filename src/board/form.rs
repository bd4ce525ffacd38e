//! Create/edit buffer for a single task.
//!
//! The form works on its own [`FormDraft`] and never touches the store. A
//! successful [`TaskForm::submit`] hands a normalized [`TaskDraft`] back to the
//! caller together with the id of the task being edited, if any.

use super::task::{Priority, Status, Task, TaskDraft, TaskId};
use chrono::{Duration, NaiveDate};

/// Editable field values while the form is open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl FormDraft {
    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            assignee: task.assignee.clone().unwrap_or_default(),
            due_date: task.due_date,
            tags: task.tags().to_vec(),
        }
    }

    fn normalized(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            status: self.status,
            priority: self.priority,
            assignee: non_blank(&self.assignee),
            due_date: self.due_date,
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags.clone())
            },
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// `Some` when editing an existing task, `None` when creating
    pub target: Option<TaskId>,
    pub draft: TaskDraft,
}

#[derive(Debug, Default)]
pub struct TaskForm {
    open: bool,
    editing: Option<TaskId>,
    draft: FormDraft,
}

impl TaskForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    /// Open with an empty, defaulted draft
    pub fn open_create(&mut self) {
        self.open = true;
        self.editing = None;
        self.draft = FormDraft::default();
    }

    /// Open seeded from `task`
    pub fn open_edit(&mut self, task: &Task) {
        self.open = true;
        self.editing = Some(task.id.clone());
        self.draft = FormDraft::from_task(task);
    }

    /// Dismiss without committing; the draft is discarded
    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
        self.draft = FormDraft::default();
    }

    /// Add a trimmed, non-empty tag not already in the draft
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.draft.tags.push(tag.to_string());
        true
    }

    /// Remove a tag by exact value
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.draft.tags.len();
        self.draft.tags.retain(|existing| existing != tag);
        self.draft.tags.len() != before
    }

    pub fn cycle_status(&mut self, forward: bool) {
        self.draft.status = if forward {
            self.draft.status.next()
        } else {
            self.draft.status.previous()
        };
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        self.draft.priority = if forward {
            self.draft.priority.next()
        } else {
            self.draft.priority.previous()
        };
    }

    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.draft.due_date = Some(date);
    }

    pub fn set_due_today(&mut self, today: NaiveDate) {
        self.set_due_date(today);
    }

    /// Move the due date by `days`, starting from `today` when unset
    pub fn shift_due_date(&mut self, days: i64, today: NaiveDate) {
        let base = self.draft.due_date.unwrap_or(today);
        self.draft.due_date = Some(base + Duration::days(days));
    }

    pub fn clear_due_date(&mut self) {
        self.draft.due_date = None;
    }

    /// Validate and hand back the normalized draft.
    ///
    /// A blank title rejects the submit and leaves the form open and unchanged.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        if self.draft.title.trim().is_empty() {
            log::debug!("Form: submit rejected, title is blank");
            return None;
        }
        let submission = FormSubmission {
            target: self.editing.clone(),
            draft: self.draft.normalized(),
        };
        self.close();
        Some(submission)
    }
}
