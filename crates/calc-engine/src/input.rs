//! Terminal keyboard input
//!
//! Maps crossterm key events onto calculator keys. Ctrl-combinations
//! cover the commands that have no printable key of their own.

use crate::core::functions::TrigFunction;
use crate::key::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal key event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Press a calculator key
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Release events are ignored so a key fires once on terminals that
    /// report both edges.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return InputAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputAction::Quit,
                KeyCode::Char('l') => InputAction::Press(Key::ClearAll),
                KeyCode::Char('p') => InputAction::Press(Key::MemoryAdd),
                KeyCode::Char('n') => InputAction::Press(Key::MemorySubtract),
                KeyCode::Char('r') => InputAction::Press(Key::MemoryRecall),
                KeyCode::Char('x') => InputAction::Press(Key::MemoryClear),
                KeyCode::Char('s') => InputAction::Press(Key::Trig(TrigFunction::Sin)),
                KeyCode::Char('o') => InputAction::Press(Key::Trig(TrigFunction::Cos)),
                KeyCode::Char('t') => InputAction::Press(Key::Trig(TrigFunction::Tan)),
                _ => InputAction::None,
            };
        }

        let key = match code {
            KeyCode::Char(c) => {
                let mut buf = [0; 4];
                Key::from_key_str(c.encode_utf8(&mut buf))
            }
            KeyCode::Enter => Some(Key::Equals),
            KeyCode::Esc => Some(Key::ClearAll),
            KeyCode::Backspace | KeyCode::Delete => Some(Key::ClearEntry),
            _ => None,
        };
        key.map_or(InputAction::None, InputAction::Press)
    }
}
