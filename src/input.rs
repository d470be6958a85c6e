//! Input mapping
//!
//! Translates terminal key events into engine commands through the
//! configured key bindings. A thin layer: repeat behavior comes from the
//! terminal's own key repeat.

use crate::game::Action;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A mapped key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// An engine command
    Game(Action),
    /// Leave the program
    Quit,
}

/// Key bindings resolved to key codes
#[derive(Debug, Clone)]
pub struct InputMap {
    move_left: Vec<KeyCode>,
    move_right: Vec<KeyCode>,
    rotate: Vec<KeyCode>,
    soft_drop: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl InputMap {
    /// Parse a key string into KeyCode
    fn parse_key(s: &str) -> KeyCode {
        match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            s if s.len() == 1 => KeyCode::Char(s.chars().next().unwrap()),
            _ => KeyCode::Char(' '), // fallback
        }
    }

    /// Parse a list of key strings into KeyCodes
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter().map(|s| Self::parse_key(s)).collect()
    }

    /// Create an input map from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: Self::parse_keys(&settings.keys.move_left),
            move_right: Self::parse_keys(&settings.keys.move_right),
            rotate: Self::parse_keys(&settings.keys.rotate),
            soft_drop: Self::parse_keys(&settings.keys.soft_drop),
            quit: Self::parse_keys(&settings.keys.quit),
        }
    }

    /// Map a key press to a command, if any is bound.
    pub fn command(&self, key: KeyEvent) -> Option<Command> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let code = normalize_key(key.code);

        if self.move_left.contains(&code) {
            Some(Command::Game(Action::MoveLeft))
        } else if self.move_right.contains(&code) {
            Some(Command::Game(Action::MoveRight))
        } else if self.rotate.contains(&code) {
            Some(Command::Game(Action::Rotate))
        } else if self.soft_drop.contains(&code) {
            Some(Command::Game(Action::SoftDrop))
        } else if self.quit.contains(&code) {
            Some(Command::Quit)
        } else {
            None
        }
    }
}

impl Default for InputMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_default_bindings() {
        let map = InputMap::default();
        assert_eq!(
            map.command(press(KeyCode::Left)),
            Some(Command::Game(Action::MoveLeft))
        );
        assert_eq!(
            map.command(press(KeyCode::Down)),
            Some(Command::Game(Action::SoftDrop))
        );
        assert_eq!(
            map.command(press(KeyCode::Up)),
            Some(Command::Game(Action::Rotate))
        );
        assert_eq!(map.command(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map.command(press(KeyCode::Char('w'))), None);
    }

    #[test]
    fn test_letter_keys_are_case_insensitive() {
        let map = InputMap::default();
        assert_eq!(
            map.command(press(KeyCode::Char('X'))),
            Some(Command::Game(Action::Rotate))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let map = InputMap::default();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(map.command(event), Some(Command::Quit));
    }
}
