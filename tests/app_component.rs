use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use tokio::time::{sleep, Duration};
use ticklist::config::Config;
use ticklist::logger::Logger;
use ticklist::store::NotificationKind;
use ticklist::ui::app_component::AppComponent;
use ticklist::ui::core::{Action, EventType, PanelKind};

fn new_app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_via_dialog(app: &mut AppComponent, title: &str) {
    press(app, KeyCode::Char('a'));
    assert!(app.is_dialog_visible());
    type_text(app, title);
    press(app, KeyCode::Enter);
}

fn screen(app: &mut AppComponent, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect()
}

fn row_of(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}

#[tokio::test(start_paused = true)]
async fn test_add_through_dialog_shows_notification() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    assert!(!app.is_dialog_visible());
    let items = app.store().todos().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Buy milk");

    let notif = &app.store().ui().notif;
    assert!(notif.visible);
    assert_eq!(notif.kind, NotificationKind::Add);
    assert_eq!(notif.item, "Buy milk");
}

#[tokio::test(start_paused = true)]
async fn test_notification_auto_dismisses_through_event_loop() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");
    assert!(app.store().ui().notif.visible);

    sleep(Duration::from_millis(1500)).await;
    sleep(Duration::from_millis(1)).await;

    let actions = app.process_background_actions();
    assert_eq!(actions.len(), 1);
    for action in actions {
        app.dispatch(action);
    }
    assert!(!app.store().ui().notif.visible);
}

fn drain_background(app: &mut AppComponent) -> usize {
    let actions = app.process_background_actions();
    let count = actions.len();
    for action in actions {
        app.dispatch(action);
    }
    count
}

#[tokio::test(start_paused = true)]
async fn test_queued_hide_does_not_dismiss_newer_notification() {
    let mut app = new_app();
    add_via_dialog(&mut app, "A");

    // A's timer fires but its hide is not drained before B is shown
    sleep(Duration::from_millis(1501)).await;
    add_via_dialog(&mut app, "B");

    assert_eq!(drain_background(&mut app), 1);
    let notif = &app.store().ui().notif;
    assert!(notif.visible);
    assert_eq!(notif.item, "B");

    sleep(Duration::from_millis(1499)).await;
    assert_eq!(drain_background(&mut app), 0);
    assert!(app.store().ui().notif.visible);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(drain_background(&mut app), 1);
    assert!(!app.store().ui().notif.visible);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_moves_item_to_done() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char(' '));
    assert!(app.store().active().is_empty());
    assert_eq!(app.store().done().len(), 1);

    // Toggling is not announced; the add notification is still current
    assert_eq!(app.store().ui().notif.kind, NotificationKind::Add);
}

#[tokio::test(start_paused = true)]
async fn test_remove_announces_deleted_title() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('d'));
    assert!(app.store().todos().is_empty());
    let notif = &app.store().ui().notif;
    assert_eq!(notif.kind, NotificationKind::Delete);
    assert_eq!(notif.text(), "Deleted \"Buy milk\"");
}

#[tokio::test(start_paused = true)]
async fn test_edit_dialog_renames_selected_todo() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    assert!(app.is_dialog_visible());
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "eggs");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().todos().items()[0].title, "Buy eggs");
    assert_eq!(app.store().ui().notif.kind, NotificationKind::Edit);
    assert_eq!(app.store().ui().notif.item, "Buy eggs");
}

#[tokio::test(start_paused = true)]
async fn test_clear_done_panel_after_confirmation() {
    let mut app = new_app();
    add_via_dialog(&mut app, "one");
    add_via_dialog(&mut app, "two");
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_panel(), PanelKind::Done);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.is_dialog_visible());
    press(&mut app, KeyCode::Enter);

    assert!(app.store().done().is_empty());
    assert_eq!(app.store().active().len(), 1);
    assert_eq!(app.store().ui().notif.kind, NotificationKind::Clear);
}

#[tokio::test(start_paused = true)]
async fn test_clear_all_can_be_cancelled() {
    let mut app = new_app();
    add_via_dialog(&mut app, "one");

    press(&mut app, KeyCode::Char('X'));
    assert!(app.is_dialog_visible());
    press(&mut app, KeyCode::Esc);

    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
    assert_eq!(app.store().todos().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clear_all_ignored_when_empty() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('X'));
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_ui_toggles() {
    let mut app = new_app();

    press(&mut app, KeyCode::Char('t'));
    assert!(app.store().ui().dark_mode);

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.store().ui().show_banner);

    let before = app.icons().theme();
    press(&mut app, KeyCode::Char('i'));
    assert_ne!(app.icons().theme(), before);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    press(&mut app, KeyCode::Char('a'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_typing_q_in_dialog_does_not_quit() {
    let mut app = new_app();
    add_via_dialog(&mut app, "quiz");
    assert!(!app.should_quit());
    assert_eq!(app.store().todos().items()[0].title, "quiz");
}

#[tokio::test(start_paused = true)]
async fn test_wide_terminal_renders_panels_side_by_side() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    let lines = screen(&mut app, 100, 30);
    let active_row = row_of(&lines, "Active (1)").unwrap();
    let done_row = row_of(&lines, "Done (0)").unwrap();
    assert_eq!(active_row, done_row);

    assert!(row_of(&lines, "Buy milk").is_some());
    assert!(row_of(&lines, "Added \"Buy milk\"").is_some());
    assert!(row_of(&lines, "x: dismiss").is_some());
}

#[tokio::test(start_paused = true)]
async fn test_narrow_terminal_stacks_panels() {
    let mut app = new_app();
    add_via_dialog(&mut app, "Buy milk");

    let lines = screen(&mut app, 60, 30);
    let active_row = row_of(&lines, "Active (1)").unwrap();
    let done_row = row_of(&lines, "Done (0)").unwrap();
    assert!(done_row > active_row);
}

#[tokio::test]
async fn test_help_dialog_renders() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    let lines = screen(&mut app, 100, 40);
    assert!(row_of(&lines, "Help").is_some());

    press(&mut app, KeyCode::Char('?'));
    assert!(!app.is_dialog_visible());
}

#[tokio::test(start_paused = true)]
async fn test_toast_renders_very_long_title() {
    let mut app = new_app();
    app.dispatch(Action::AddTodo("x".repeat(70_000)));
    assert!(app.store().ui().notif.visible);

    let lines = screen(&mut app, 80, 24);
    assert_eq!(lines.len(), 24);
}
