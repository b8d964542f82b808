//! Terminal key events mapped onto game inputs.
//!
//! Jump is Space or Up, Duck is Down, Quit is Esc or `q`. Terminals that
//! report key releases (via the keyboard-enhancement protocol) drive the
//! state machine with real press/release pairs. On terminals that only
//! report presses, a fallback synthesizes releases: jump taps release
//! immediately and duck becomes a press-to-toggle, the same compromise
//! terminal runners usually make.

use crate::world::player::DinoInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// One decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(DinoInput),
    Quit,
}

/// Decode a key event on a terminal that reports releases.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    let release = key.kind == KeyEventKind::Release;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            if release {
                Some(InputAction::Game(DinoInput::OtherReleased))
            } else {
                Some(InputAction::Quit)
            }
        }
        KeyCode::Char(' ') | KeyCode::Up => Some(InputAction::Game(if release {
            DinoInput::JumpReleased
        } else {
            DinoInput::JumpPressed
        })),
        KeyCode::Down => Some(InputAction::Game(if release {
            DinoInput::DuckReleased
        } else {
            DinoInput::DuckPressed
        })),
        _ => {
            if release {
                Some(InputAction::Game(DinoInput::OtherReleased))
            } else {
                None
            }
        }
    }
}

/// Decode a key event on a press-only terminal. `ducking` is whether the
/// dino currently holds the duck state, so Down can toggle it off.
/// Returns the sequence of events the press stands in for.
pub fn map_key_press_only(key: KeyEvent, ducking: bool) -> (Vec<InputAction>, bool) {
    if key.kind == KeyEventKind::Release {
        return (Vec::new(), ducking);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => (vec![InputAction::Quit], ducking),
        KeyCode::Char(' ') | KeyCode::Up => (
            vec![
                InputAction::Game(DinoInput::JumpPressed),
                InputAction::Game(DinoInput::JumpReleased),
            ],
            ducking,
        ),
        KeyCode::Down => {
            if ducking {
                (vec![InputAction::Game(DinoInput::DuckReleased)], false)
            } else {
                (vec![InputAction::Game(DinoInput::DuckPressed)], true)
            }
        }
        _ => (vec![InputAction::Game(DinoInput::OtherReleased)], ducking),
    }
}
