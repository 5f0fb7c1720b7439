//! Keyboard input source backed by crossterm events.
use std::time::Duration;

use client_frontend_core::{Button, ButtonState, Buttons, InputSource, OverlayError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Samples every pending terminal event once per frame.
///
/// Terminals rarely report key releases, so each press counts as a trigger
/// for the frame it arrives in. Auto-repeat shows up either as more presses
/// or, with keyboard enhancement, as repeat events that only set the held
/// set.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    state: ButtonState,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one terminal event into the current frame.
    pub fn apply(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        let buttons = handle_key(key);
        match key.kind {
            KeyEventKind::Press => {
                self.state.triggered |= buttons;
                self.state.repeated |= buttons;
            }
            KeyEventKind::Repeat => self.state.repeated |= buttons,
            KeyEventKind::Release => {}
        }
    }

    /// Starts a new frame with no buttons down.
    pub fn reset(&mut self) {
        self.state = ButtonState::default();
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<()> {
        self.reset();
        while event::poll(Duration::ZERO).map_err(OverlayError::Input)? {
            let event = event::read().map_err(OverlayError::Input)?;
            self.apply(&event);
        }
        if !self.state.triggered.is_empty() {
            tracing::trace!(buttons = ?self.state.triggered, "keys pressed");
        }
        Ok(())
    }

    fn is_triggered(&self, button: Button) -> bool {
        self.state.is_triggered(button)
    }

    fn is_repeated(&self, button: Button) -> bool {
        self.state.is_repeated(button)
    }
}

/// Maps a key to the buttons it stands for.
///
/// Raw mode swallows the interrupt signal, so Ctrl+C backs out like Esc.
pub fn handle_key(key: &KeyEvent) -> Buttons {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Buttons::BACK,
            _ => Buttons::empty(),
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Buttons::BACK,
        KeyCode::Left => Buttons::LEFT,
        KeyCode::Right => Buttons::RIGHT,
        KeyCode::Up => Buttons::UP,
        KeyCode::Down => Buttons::DOWN,
        KeyCode::PageDown => Buttons::JUMP_DOWN,
        KeyCode::PageUp => Buttons::JUMP_UP,
        KeyCode::Enter => Buttons::USE,
        KeyCode::Char(ch) => handle_char(ch),
        _ => Buttons::empty(),
    }
}

fn handle_char(raw: char) -> Buttons {
    match raw.to_ascii_lowercase() {
        'h' => Buttons::LEFT,
        'l' => Buttons::RIGHT,
        'k' => Buttons::UP,
        'j' => Buttons::DOWN,
        'x' => Buttons::BACK,
        's' => Buttons::JUMP_DOWN,
        'q' => Buttons::JUMP_UP,
        ' ' | 'c' => Buttons::USE,
        _ => Buttons::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::empty(), KeyEventKind::Press)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_vi_keys_move() {
        assert_eq!(handle_key(&key(KeyCode::Left)), Buttons::LEFT);
        assert_eq!(handle_key(&key(KeyCode::Char('h'))), Buttons::LEFT);
        assert_eq!(handle_key(&key(KeyCode::Char('L'))), Buttons::RIGHT);
        assert_eq!(handle_key(&key(KeyCode::Char('k'))), Buttons::UP);
        assert_eq!(handle_key(&key(KeyCode::Down)), Buttons::DOWN);
    }

    #[test]
    fn confirm_keys_split_into_primary_and_secondary() {
        assert_eq!(handle_key(&key(KeyCode::PageDown)), Buttons::JUMP_DOWN);
        assert_eq!(handle_key(&key(KeyCode::Char('s'))), Buttons::JUMP_DOWN);
        assert_eq!(handle_key(&key(KeyCode::PageUp)), Buttons::JUMP_UP);
        assert_eq!(handle_key(&key(KeyCode::Char('q'))), Buttons::JUMP_UP);
        assert_eq!(handle_key(&key(KeyCode::Enter)), Buttons::USE);
        assert_eq!(handle_key(&key(KeyCode::Char(' '))), Buttons::USE);
        assert_eq!(handle_key(&key(KeyCode::Char('c'))), Buttons::USE);
    }

    #[test]
    fn ctrl_c_backs_out_instead_of_confirming() {
        let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(handle_key(&ctrl_c), Buttons::BACK);
        assert_eq!(handle_key(&key(KeyCode::Esc)), Buttons::BACK);
        assert_eq!(handle_key(&key(KeyCode::Char('z'))), Buttons::empty());
    }

    #[test]
    fn presses_trigger_and_repeats_only_hold() {
        let mut input = KeyboardInput::new();
        input.apply(&Event::Key(key(KeyCode::Down)));
        input.apply(&Event::Key(key_with(
            KeyCode::Right,
            KeyModifiers::empty(),
            KeyEventKind::Repeat,
        )));
        input.apply(&Event::Resize(80, 24));

        assert!(input.is_triggered(Button::Down));
        assert!(input.is_repeated(Button::Down));
        assert!(!input.is_triggered(Button::Right));
        assert!(input.is_repeated(Button::Right));

        input.reset();
        assert_eq!(input.state(), ButtonState::default());
    }

    #[test]
    fn releases_are_ignored() {
        let mut input = KeyboardInput::new();
        input.apply(&Event::Key(key_with(
            KeyCode::Esc,
            KeyModifiers::empty(),
            KeyEventKind::Release,
        )));
        assert!(!input.is_repeated(Button::Back));
    }
}
