use chrono::NaiveDate;
use taskboard::board::{Dashboard, Priority, Status, TaskForm};

#[test]
fn test_duplicate_tag_suppressed() {
    let mut form = TaskForm::new();
    form.open_create();

    assert!(form.add_tag("Design"));
    assert!(!form.add_tag("Design"));
    assert_eq!(form.draft().tags, vec!["Design".to_string()]);
}

#[test]
fn test_tags_are_case_sensitive_and_trimmed() {
    let mut form = TaskForm::new();
    form.open_create();

    assert!(form.add_tag("  design  "));
    assert!(form.add_tag("Design"));
    assert!(!form.add_tag("   "));
    assert_eq!(form.draft().tags, vec!["design".to_string(), "Design".to_string()]);

    assert!(form.remove_tag("design"));
    assert!(!form.remove_tag("design"));
    assert_eq!(form.draft().tags, vec!["Design".to_string()]);
}

#[test]
fn test_whitespace_title_rejected_and_form_stays_open() {
    let mut dashboard = Dashboard::default();
    dashboard.open_new_task_form();
    dashboard.form_mut().draft_mut().title = "   ".to_string();

    assert!(dashboard.submit_form().is_none());
    assert!(dashboard.store().is_empty());
    assert!(dashboard.form().is_open());
    assert_eq!(dashboard.form().draft().title, "   ");
}

#[test]
fn test_submit_normalizes_draft() {
    let mut form = TaskForm::new();
    form.open_create();
    {
        let draft = form.draft_mut();
        draft.title = "  Write docs ".to_string();
        draft.description = "   ".to_string();
        draft.assignee = " Ana Lima ".to_string();
    }
    form.cycle_priority(true);
    form.set_due_date(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

    let submission = form.submit().unwrap();
    assert!(submission.target.is_none());
    assert_eq!(submission.draft.title, "Write docs");
    assert_eq!(submission.draft.description, None);
    assert_eq!(submission.draft.assignee.as_deref(), Some("Ana Lima"));
    assert_eq!(submission.draft.priority, Priority::High);
    assert_eq!(submission.draft.tags, None);
    assert_eq!(submission.draft.status, Status::Todo);

    assert!(!form.is_open());
    assert_eq!(form.draft().title, "");
}

#[test]
fn test_cancel_discards_draft() {
    let mut form = TaskForm::new();
    form.open_create();
    form.draft_mut().title = "half written".to_string();
    form.add_tag("wip");
    form.close();

    form.open_create();
    assert_eq!(form.draft().title, "");
    assert!(form.draft().tags.is_empty());
}

#[test]
fn test_shift_due_date_starts_from_today() {
    let today = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    let mut form = TaskForm::new();
    form.open_create();

    form.shift_due_date(1, today);
    assert_eq!(form.draft().due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    form.clear_due_date();
    assert_eq!(form.draft().due_date, None);
}
