//! Key event to action mapping, driven by the configurable bindings in
//! [`Settings`](crate::settings::Settings).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::settings::Controls;
use crate::types::GameAction;

/// Resolve a key event against the bindings. Enter always starts from the
/// menu; everything else goes through the binding table.
pub fn action_for_key(key: KeyEvent, controls: &Controls) -> Option<GameAction> {
    if key.code == KeyCode::Enter {
        return Some(GameAction::Start);
    }

    let code = normalize(key.code);
    if code == normalize(controls.move_left) {
        Some(GameAction::MoveLeft)
    } else if code == normalize(controls.move_right) {
        Some(GameAction::MoveRight)
    } else if code == normalize(controls.move_down) {
        Some(GameAction::SoftDrop)
    } else if code == normalize(controls.rotate) {
        Some(GameAction::Rotate)
    } else if code == normalize(controls.hard_drop) {
        Some(GameAction::HardDrop)
    } else if code == normalize(controls.hold) {
        Some(GameAction::Hold)
    } else if code == normalize(controls.pause) {
        Some(GameAction::Pause)
    } else {
        None
    }
}

/// Quit on `q`, `Esc`, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Case-fold character keys so bindings match regardless of shift state.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
