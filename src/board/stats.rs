//! Summary statistics shown above the board.

use super::task::{Status, Task};
use chrono::{DateTime, Local, NaiveDateTime};

/// Derived counters for the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl BoardStats {
    /// Compute statistics against an explicit reference time
    pub fn compute<'a, I>(tasks: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            match task.status {
                Status::Completed => stats.completed += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Todo | Status::Done => {}
            }
            if is_overdue(task, now) {
                stats.overdue += 1;
            }
        }
        stats
    }

    /// Share of completed tasks, rounded to the nearest percent
    #[must_use]
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.overdue > 0
    }
}

/// A task is overdue once the start of its due day lies strictly before `now`,
/// unless it is `completed`. `done` tasks still count.
#[must_use]
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    if task.status == Status::Completed {
        return false;
    }
    task.due_date
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .is_some_and(|due| due < now)
}

/// Current local wall-clock time, used as the default reference point
#[must_use]
pub fn local_now() -> NaiveDateTime {
    let now: DateTime<Local> = Local::now();
    now.naive_local()
}
