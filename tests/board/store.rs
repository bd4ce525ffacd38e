use std::collections::HashSet;
use taskboard::board::{sample::sample_tasks, Status, StoreEvent, Task, TaskDraft, TaskId, TaskStore};

fn task(id: &str, title: &str, status: Status) -> Task {
    Task::from_draft(TaskId::from(id), TaskDraft::titled(title).with_status(status))
}

#[test]
fn test_move_scenario_from_todo_to_in_progress() {
    let mut store = TaskStore::with_tasks(vec![task("1", "A", Status::Todo)]);

    assert!(store.move_task(&TaskId::from("1"), Status::InProgress));

    assert!(store.tasks_by_status(Status::Todo).is_empty());
    let in_progress = store.tasks_by_status(Status::InProgress);
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].title, "A");
}

#[test]
fn test_repeated_move_is_idempotent() {
    let mut store = TaskStore::with_tasks(vec![task("1", "A", Status::Todo)]);
    let mut events = store.subscribe();

    assert!(store.move_task(&TaskId::from("1"), Status::Done));
    let after_first = store.tasks().to_vec();
    assert!(!store.move_task(&TaskId::from("1"), Status::Done));

    assert_eq!(store.tasks(), after_first.as_slice());
    assert!(matches!(events.try_recv(), Ok(StoreEvent::TaskMoved { .. })));
    assert!(events.try_recv().is_err(), "second move must not notify");
}

#[test]
fn test_tasks_by_status_partitions_the_list() {
    let mut store = TaskStore::with_tasks(sample_tasks());
    store.add_task(TaskDraft::titled("Extra").with_status(Status::Done));

    let mut seen = HashSet::new();
    let mut count = 0;
    for status in Status::ALL {
        for task in store.tasks_by_status(status) {
            assert_eq!(task.status, status);
            assert!(seen.insert(task.id.clone()), "task {} listed twice", task.id);
            count += 1;
        }
    }
    assert_eq!(count, store.len());
}

#[test]
fn test_added_ids_are_unique() {
    let mut store = TaskStore::with_tasks(sample_tasks());
    let mut ids: HashSet<TaskId> = store.tasks().iter().map(|t| t.id.clone()).collect();

    for n in 0..50 {
        let task = store.add_task(TaskDraft::titled(format!("Task {n}")));
        assert!(ids.insert(task.id), "duplicate id generated");
    }
    assert_eq!(store.len(), 55);
}

#[test]
fn test_lanes_keep_insertion_order() {
    let mut store = TaskStore::new();
    let first = store.add_task(TaskDraft::titled("first"));
    store.add_task(TaskDraft::titled("second"));
    store.add_task(TaskDraft::titled("third"));

    // Position follows the task list, not the time of the last move
    store.move_task(&first.id, Status::Done);
    store.move_task(&first.id, Status::Todo);

    let titles: Vec<&str> = store
        .tasks_by_status(Status::Todo)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_update_unknown_task_is_noop() {
    let mut store = TaskStore::with_tasks(vec![task("1", "A", Status::Todo)]);
    let mut events = store.subscribe();

    assert!(store.update_task(&TaskId::from("missing"), TaskDraft::titled("B")).is_none());
    assert!(!store.move_task(&TaskId::from("missing"), Status::Done));
    assert_eq!(store.get(&TaskId::from("1")).map(|t| t.title.as_str()), Some("A"));
    assert!(events.try_recv().is_err());
}

#[test]
fn test_dropped_subscriber_is_pruned() {
    let mut store = TaskStore::new();
    let rx = store.subscribe();
    drop(rx);
    let mut live = store.subscribe();

    store.add_task(TaskDraft::titled("A"));
    assert!(matches!(live.try_recv(), Ok(StoreEvent::TaskAdded(_))));
}
