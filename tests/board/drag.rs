use taskboard::board::{DragController, DragState, Status, Task, TaskDraft, TaskId, TaskStore};

fn store() -> TaskStore {
    TaskStore::with_tasks(vec![
        Task::from_draft(TaskId::from("1"), TaskDraft::titled("A")),
        Task::from_draft(TaskId::from("2"), TaskDraft::titled("B").with_status(Status::Done)),
    ])
}

#[test]
fn test_drop_on_other_lane_moves() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.begin_transfer(TaskId::from("1"));
    assert!(drag.complete_transfer(&mut store, Status::Completed));
    assert_eq!(store.get(&TaskId::from("1")).map(|t| t.status), Some(Status::Completed));
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn test_drop_on_same_lane_is_noop() {
    let mut store = store();
    let mut events = store.subscribe();
    let mut drag = DragController::new();

    drag.begin_transfer(TaskId::from("2"));
    assert!(!drag.complete_transfer(&mut store, Status::Done));
    assert!(events.try_recv().is_err());
    assert!(!drag.is_dragging());
}

#[test]
fn test_release_outside_lane_leaves_store_untouched() {
    let mut store = store();
    let before = store.tasks().to_vec();
    let mut drag = DragController::new();

    drag.begin_transfer(TaskId::from("1"));
    drag.cancel_transfer();

    assert_eq!(store.tasks(), before.as_slice());
    assert!(!drag.complete_transfer(&mut store, Status::Completed));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn test_new_gesture_replaces_stale_transfer() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.begin_transfer(TaskId::from("1"));
    drag.begin_transfer(TaskId::from("2"));
    assert_eq!(drag.in_flight(), Some(&TaskId::from("2")));

    assert!(drag.complete_transfer(&mut store, Status::Todo));
    assert_eq!(store.get(&TaskId::from("1")).map(|t| t.status), Some(Status::Todo));
    assert_eq!(store.get(&TaskId::from("2")).map(|t| t.status), Some(Status::Todo));
}

#[test]
fn test_every_lane_accepts_drops() {
    let drag = DragController::new();
    assert!(Status::ALL.iter().all(|status| drag.accepts_drop(*status)));
}
