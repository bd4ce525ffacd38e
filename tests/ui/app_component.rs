use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use taskboard::board::{sample::sample_tasks, Dashboard, Status, TaskId};
use taskboard::config::Config;
use taskboard::logger::Logger;
use taskboard::theme::{MemoryPreferenceStore, Theme, ThemePreference};
use taskboard::ui::core::EventType;
use taskboard::ui::AppComponent;

fn app_with(dashboard: Dashboard) -> AppComponent {
    let theme = ThemePreference::initialize(Box::new(MemoryPreferenceStore::new()), Some(false));
    AppComponent::new(dashboard, theme, Logger::new(), &Config::default())
}

fn sample_app() -> AppComponent {
    app_with(Dashboard::with_tasks(sample_tasks()))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn mouse(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn render(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn status_of(app: &AppComponent, id: &str) -> Option<Status> {
    app.dashboard().store().get(&TaskId::from(id)).map(|t| t.status)
}

#[test]
fn test_renders_dashboard_chrome() {
    let mut app = sample_app();
    let screen = render(&mut app, 120, 40);

    assert!(screen.contains("Task Dashboard"));
    assert!(screen.contains("Total Tasks"));
    assert!(screen.contains("To Do"));
    assert!(screen.contains("In Progress"));
    assert!(screen.contains("Completed"));
    assert!(screen.contains("20% done"));
}

#[test]
fn test_move_card_with_keyboard() {
    let mut app = sample_app();

    // Cursor starts on the first card of the To Do lane
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.dashboard().dragging(), Some(&TaskId::from("2")));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('m'));

    assert_eq!(status_of(&app, "2"), Some(Status::InProgress));
    assert_eq!(app.dashboard().dragging(), None);
    assert_eq!(app.status_message(), Some("✅ Task moved to In Progress"));
}

#[test]
fn test_escape_cancels_move() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Esc);

    assert_eq!(status_of(&app, "2"), Some(Status::Todo));
    assert_eq!(app.dashboard().dragging(), None);
    assert_eq!(app.status_message(), None);
}

#[test]
fn test_global_keys_ignored_while_moving() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_create_task_through_form() {
    let mut app = app_with(Dashboard::default());

    press(&mut app, KeyCode::Char('a'));
    assert!(app.dashboard().form().is_open());

    // 'q' is text while the form is open
    type_text(&mut app, "Quarterly review");
    assert!(!app.should_quit());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));

    assert!(!app.dashboard().form().is_open());
    let todo = app.dashboard().tasks_by_status(Status::Todo);
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0].title, "Quarterly review");
    assert_eq!(app.status_message(), Some("✅ Task created"));
}

#[test]
fn test_blank_title_keeps_form_open() {
    let mut app = app_with(Dashboard::default());

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.dashboard().form().is_open());
    assert!(app.dashboard().store().is_empty());
    assert!(render(&mut app, 100, 40).contains("Title is required"));
}

#[test]
fn test_edit_selected_task() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard().form().editing(), Some(&TaskId::from("2")));
    assert!(render(&mut app, 100, 40).contains("Edit Task"));

    type_text(&mut app, " v2");
    press(&mut app, KeyCode::Enter);

    let task = app.dashboard().store().get(&TaskId::from("2")).unwrap();
    assert_eq!(task.title, "User Authentication Flow v2");
    assert_eq!(app.dashboard().store().len(), 5);
    assert_eq!(app.status_message(), Some("✅ Task updated"));
}

#[test]
fn test_escape_discards_form() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " scrapped");
    press(&mut app, KeyCode::Esc);

    assert!(!app.dashboard().form().is_open());
    let task = app.dashboard().store().get(&TaskId::from("2")).unwrap();
    assert_eq!(task.title, "User Authentication Flow");
}

#[test]
fn test_theme_toggle() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.status_message(), Some("✅ Theme switched to dark"));

    // Message clears on the next key press
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.status_message(), Some("✅ Theme switched to light"));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.status_message(), None);
}

#[test]
fn test_theme_changes_background() {
    let mut app = sample_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let light_bg = terminal.backend().buffer()[(0, 0)].bg;
    assert_eq!(light_bg, Theme::Light.palette().background);

    press(&mut app, KeyCode::Char('t'));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Theme::Dark.palette().background);
}

#[test]
fn test_help_and_log_dialogs() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());
    // Board keys do nothing behind a dialog
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.dashboard().dragging(), None);
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());

    app.logger().log("[INFO] hello from the test".to_string());
    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_dialog_visible());
    assert!(render(&mut app, 100, 40).contains("hello from the test"));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_form() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('a'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_mouse_drag_between_lanes() {
    let mut app = sample_app();
    // Mouse hit areas come from the last frame
    render(&mut app, 80, 24);

    // Board starts below the header and stat cards; first To Do card at row 8
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 3, 8);
    assert_eq!(app.dashboard().dragging(), Some(&TaskId::from("2")));
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 45, 16);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 45, 16);

    assert_eq!(status_of(&app, "2"), Some(Status::Done));
    assert_eq!(app.dashboard().dragging(), None);
}

#[test]
fn test_mouse_click_opens_card() {
    let mut app = sample_app();
    render(&mut app, 80, 24);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 3, 8);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 3, 8);

    assert_eq!(app.dashboard().dragging(), None);
    assert_eq!(app.dashboard().form().editing(), Some(&TaskId::from("2")));
    assert_eq!(status_of(&app, "2"), Some(Status::Todo));
}

#[test]
fn test_tick_keeps_board_state() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('m'));
    app.handle_event(EventType::Tick);
    assert_eq!(app.dashboard().dragging(), Some(&TaskId::from("2")));
}
