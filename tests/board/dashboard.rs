use taskboard::board::{sample::sample_tasks, Dashboard, Status, StoreEvent, TaskDraft, TaskId};

#[test]
fn test_sample_board_lanes() {
    let dashboard = Dashboard::with_tasks(sample_tasks());
    let lanes = dashboard.lanes();

    let titles: Vec<&str> = lanes.iter().map(|lane| lane.title).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done", "Completed"]);

    let counts: Vec<usize> = lanes.iter().map(|lane| lane.tasks.len()).collect();
    assert_eq!(counts, vec![2, 1, 1, 1]);
}

#[test]
fn test_create_through_form() {
    let mut dashboard = Dashboard::default();
    let mut events = dashboard.subscribe();

    dashboard.open_new_task_form();
    dashboard.form_mut().draft_mut().title = "New card".to_string();
    assert!(dashboard.form_mut().add_tag("Design"));
    let task = dashboard.submit_form().unwrap();

    assert_eq!(task.status, Status::Todo);
    assert_eq!(task.tags(), ["Design".to_string()]);
    assert_eq!(dashboard.store().len(), 1);
    assert_eq!(events.try_recv().ok(), Some(StoreEvent::TaskAdded(task.id)));
}

#[test]
fn test_edit_through_form_keeps_id() {
    let mut dashboard = Dashboard::with_tasks(sample_tasks());
    let id = TaskId::from("3");

    assert!(dashboard.open_task(&id));
    assert_eq!(dashboard.form().editing(), Some(&id));
    dashboard.form_mut().draft_mut().title = "Database Migration v2".to_string();
    dashboard.form_mut().cycle_status(true);

    let updated = dashboard.submit_form().unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.status, Status::Completed);
    assert_eq!(dashboard.store().len(), 5);
    assert_eq!(
        dashboard.store().get(&id).map(|t| t.title.as_str()),
        Some("Database Migration v2")
    );
}

#[test]
fn test_editing_copies_tags() {
    let mut dashboard = Dashboard::with_tasks(sample_tasks());
    let id = TaskId::from("1");

    dashboard.open_task(&id);
    dashboard.form_mut().add_tag("Extra");
    dashboard.close_form();

    assert_eq!(dashboard.store().get(&id).map(|t| t.tags().len()), Some(3));
}

#[test]
fn test_open_unknown_task_leaves_form_closed() {
    let mut dashboard = Dashboard::with_tasks(sample_tasks());
    assert!(!dashboard.open_task(&TaskId::from("nope")));
    assert!(!dashboard.form().is_open());
}

#[test]
fn test_drag_between_lanes() {
    let mut dashboard = Dashboard::with_tasks(sample_tasks());
    let id = TaskId::from("2");

    assert!(dashboard.begin_drag(&id));
    assert_eq!(dashboard.dragging(), Some(&id));
    assert!(dashboard.drop_on(Status::InProgress));
    assert_eq!(dashboard.dragging(), None);
    assert_eq!(dashboard.tasks_by_status(Status::InProgress).len(), 2);

    assert!(!dashboard.begin_drag(&TaskId::from("unknown")));
    assert!(!dashboard.drop_on(Status::Done));
}

#[test]
fn test_unknown_pickup_clears_stale_transfer() {
    let mut dashboard = Dashboard::with_tasks(sample_tasks());

    assert!(dashboard.begin_drag(&TaskId::from("1")));
    assert!(!dashboard.begin_drag(&TaskId::from("ghost")));
    assert_eq!(dashboard.dragging(), None);

    assert!(!dashboard.drop_on(Status::Completed));
    assert_eq!(
        dashboard.store().get(&TaskId::from("1")).map(|t| t.status),
        Some(Status::InProgress)
    );
}

#[test]
fn test_stats_follow_store() {
    let mut dashboard = Dashboard::default();
    dashboard
        .store_mut()
        .add_task(TaskDraft::titled("A").with_status(Status::Completed));
    dashboard.store_mut().add_task(TaskDraft::titled("B"));

    let stats = dashboard.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.completion_percent(), 50);
}
