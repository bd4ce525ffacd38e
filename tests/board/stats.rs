use chrono::{Duration, NaiveDate, NaiveDateTime};
use taskboard::board::{BoardStats, Status, Task, TaskDraft, TaskId, TaskStore};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn due_yesterday(id: &str, status: Status) -> Task {
    let yesterday = now().date() - Duration::days(1);
    Task::from_draft(
        TaskId::from(id),
        TaskDraft::titled(id).with_status(status).with_due_date(yesterday),
    )
}

#[test]
fn test_done_counts_as_overdue_but_completed_does_not() {
    let done = TaskStore::with_tasks(vec![due_yesterday("1", Status::Done)]);
    assert_eq!(done.compute_stats_at(now()).overdue, 1);

    let completed = TaskStore::with_tasks(vec![due_yesterday("1", Status::Completed)]);
    assert_eq!(completed.compute_stats_at(now()).overdue, 0);
}

#[test]
fn test_due_today_is_overdue_after_midnight() {
    let today = Task::from_draft(
        TaskId::from("1"),
        TaskDraft::titled("today").with_due_date(now().date()),
    );
    let store = TaskStore::with_tasks(vec![today]);
    assert_eq!(store.compute_stats_at(now()).overdue, 1);

    let midnight = now().date().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(store.compute_stats_at(midnight).overdue, 0);
}

#[test]
fn test_totals_match_lanes() {
    let mut store = TaskStore::new();
    for (n, status) in Status::ALL.iter().cycle().take(9).enumerate() {
        store.add_task(TaskDraft::titled(format!("t{n}")).with_status(*status));
    }

    let stats = store.compute_stats_at(now());
    assert_eq!(stats.total, store.len());
    assert_eq!(stats.completed, store.tasks_by_status(Status::Completed).len());
    assert_eq!(stats.in_progress, store.tasks_by_status(Status::InProgress).len());
    let others = store.tasks_by_status(Status::Todo).len() + store.tasks_by_status(Status::Done).len();
    assert_eq!(stats.completed + stats.in_progress + others, stats.total);
}

#[test]
fn test_empty_board_has_zero_percent() {
    let stats = BoardStats::default();
    assert_eq!(stats.completion_percent(), 0);
    assert!(!stats.needs_attention());
}

#[test]
fn test_completion_percent_rounds() {
    let stats = BoardStats {
        total: 3,
        completed: 2,
        in_progress: 0,
        overdue: 1,
    };
    assert_eq!(stats.completion_percent(), 67);
    assert!(stats.needs_attention());
}
