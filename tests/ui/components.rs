use chrono::NaiveDate;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use taskboard::board::{BoardStats, Priority, Status, Task, TaskDraft, TaskId};
use taskboard::ui::components::task_card_component::CardHighlight;
use taskboard::ui::components::{StatsComponent, StatusBar, TaskCardComponent};
use taskboard::ui::core::{Component, ViewContext};

fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Cell position where `needle` starts
fn find_cell(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let target: Vec<String> = needle.chars().map(String::from).collect();
    for y in area.top()..area.bottom() {
        let row: Vec<&str> = (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
        if let Some(start) = row.windows(target.len()).position(|window| window == target.as_slice()) {
            return Some((area.left() + start as u16, y));
        }
    }
    None
}

fn context() -> ViewContext {
    let mut ctx = ViewContext::default();
    ctx.now = NaiveDate::from_ymd_opt(2025, 1, 12)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    ctx
}

fn card_task() -> Task {
    let mut draft = TaskDraft::titled("Design System")
        .with_status(Status::InProgress)
        .with_priority(Priority::High)
        .with_due_date(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    draft.description = Some("Tokens and components\nsecond line".to_string());
    draft.assignee = Some("Sarah Chen".to_string());
    draft.tags = Some(vec![
        "Design".to_string(),
        "UI".to_string(),
        "Frontend".to_string(),
        "UX".to_string(),
    ]);
    Task::from_draft(TaskId::from("1"), draft)
}

#[test]
fn test_card_shows_task_details() {
    let task = card_task();
    let ctx = context();
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();

    terminal
        .draw(|f| TaskCardComponent::new(&task, CardHighlight::None).render(f, f.area(), &ctx))
        .unwrap();

    let text = screen(&terminal);
    assert!(text.contains("Design System"));
    assert!(text.contains("Tokens and components"));
    assert!(!text.contains("second line"));
    assert!(text.contains("#Design #UI #Frontend (+1)"));
    assert!(text.contains("tomorrow"));
    assert!(text.contains("SC"));
}

#[test]
fn test_card_hides_optional_fields() {
    let task = card_task();
    let mut ctx = context();
    ctx.display.show_descriptions = false;
    ctx.display.show_assignees = false;
    ctx.max_card_tags = 1;
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();

    terminal
        .draw(|f| TaskCardComponent::new(&task, CardHighlight::Selected).render(f, f.area(), &ctx))
        .unwrap();

    let text = screen(&terminal);
    assert!(!text.contains("Tokens"));
    assert!(!text.contains("SC"));
    assert!(text.contains("#Design (+3)"));
}

#[test]
fn test_overdue_due_date_uses_destructive_color() {
    let mut task = card_task();
    task.due_date = NaiveDate::from_ymd_opt(2025, 1, 10);
    let ctx = context();
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();

    terminal
        .draw(|f| TaskCardComponent::new(&task, CardHighlight::None).render(f, f.area(), &ctx))
        .unwrap();

    let (x, y) = find_cell(&terminal, "last Friday").unwrap();
    assert_eq!(terminal.backend().buffer()[(x, y)].fg, ctx.palette.destructive);
}

#[test]
fn test_stats_cards() {
    let mut stats = StatsComponent::new();
    stats.update_context(context());
    stats.update_data(BoardStats {
        total: 4,
        completed: 1,
        in_progress: 2,
        overdue: 1,
    });
    let mut terminal = Terminal::new(TestBackend::new(120, 4)).unwrap();

    terminal.draw(|f| stats.render(f, f.area())).unwrap();

    let text = screen(&terminal);
    assert!(text.contains("Total Tasks"));
    assert!(text.contains("25% done"));
    assert!(text.contains("Needs attention"));
}

#[test]
fn test_stats_without_overdue_has_no_warning() {
    let mut stats = StatsComponent::new();
    stats.update_data(BoardStats::default());
    let mut terminal = Terminal::new(TestBackend::new(120, 4)).unwrap();

    terminal.draw(|f| stats.render(f, f.area())).unwrap();

    let text = screen(&terminal);
    assert!(text.contains("0% done"));
    assert!(!text.contains("Needs attention"));
}

#[test]
fn test_status_bar_modes() {
    let palette = ViewContext::default().palette;
    let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();

    terminal
        .draw(|f| StatusBar::render(f, Rect::new(0, 0, 100, 1), None, true, &palette))
        .unwrap();
    assert!(screen(&terminal).contains("Moving card"));

    terminal
        .draw(|f| StatusBar::render(f, f.area(), Some("✅ Task created"), true, &palette))
        .unwrap();
    let text = screen(&terminal);
    assert!(text.contains("Task created"));
    assert!(!text.contains("Moving card"));
}
