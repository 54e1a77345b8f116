use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn press(code: KeyCode) -> Action {
    handle_key_event(make_key(code, KeyModifiers::NONE))
}

#[test]
fn test_should_quit_on_q() {
    assert!(should_quit(make_key(KeyCode::Char('q'), KeyModifiers::NONE)));
}

#[test]
fn test_should_quit_on_ctrl_c() {
    assert!(should_quit(make_key(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
}

#[test]
fn test_should_not_quit_on_other_keys() {
    assert!(!should_quit(make_key(KeyCode::Char('a'), KeyModifiers::NONE)));
    assert!(!should_quit(make_key(KeyCode::Char('c'), KeyModifiers::NONE)));
    assert!(!should_quit(make_key(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(!should_quit(make_key(KeyCode::Esc, KeyModifiers::NONE)));
}

#[test]
fn test_event_handler_creation() {
    let handler = EventHandler::new(Duration::from_millis(250));
    assert_eq!(handler.tick_rate, Duration::from_millis(250));
}

#[test]
fn test_event_resize_variant() {
    match Event::Resize(80, 24) {
        Event::Resize(w, h) => {
            assert_eq!(w, 80);
            assert_eq!(h, 24);
        }
        _ => panic!("expected Resize variant"),
    }
}

// --- handle_key_event tests ---

#[test]
fn test_quit_keys() {
    assert_eq!(press(KeyCode::Char('q')), Action::Quit);
    assert_eq!(
        handle_key_event(make_key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Action::Quit
    );
}

#[test]
fn test_next_tab_keys() {
    for code in [KeyCode::Right, KeyCode::Tab, KeyCode::Char('l')] {
        assert_eq!(press(code), Action::NextTab, "{code:?}");
    }
}

#[test]
fn test_previous_tab_keys() {
    for code in [KeyCode::Left, KeyCode::BackTab, KeyCode::Char('h')] {
        assert_eq!(press(code), Action::PreviousTab, "{code:?}");
    }
}

#[test]
fn test_digit_keys_jump_to_tab() {
    assert_eq!(press(KeyCode::Char('1')), Action::SelectTab(0));
    assert_eq!(press(KeyCode::Char('6')), Action::SelectTab(5));
    assert_eq!(press(KeyCode::Char('9')), Action::SelectTab(8));
    assert_eq!(press(KeyCode::Char('0')), Action::None);
}

#[test]
fn test_aggregate_keys() {
    for code in [KeyCode::Char('d'), KeyCode::Home, KeyCode::Esc] {
        assert_eq!(press(code), Action::Select(Selection::Aggregate), "{code:?}");
    }
}

#[test]
fn test_special_key() {
    assert_eq!(press(KeyCode::Char('t')), Action::Select(Selection::Special));
}

#[test]
fn test_unbound_key_is_none() {
    assert_eq!(press(KeyCode::Char('z')), Action::None);
    assert_eq!(press(KeyCode::Enter), Action::None);
}

#[test]
fn test_key_release_is_ignored() {
    let mut key = make_key(KeyCode::Right, KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(handle_key_event(key), Action::None);
}
