//! Key mapping from terminal events to game commands.
//!
//! Keys are first named the way the settings record names them ("ArrowLeft",
//! "Space", "KeyA", "Digit1", ...), then looked up in the configured controls.
//! A few fixed keys (quit, autopilot, restart, new game, theme, ghost) sit
//! beside the configurable ones; configured bindings take precedence over
//! them. Ctrl+C always quits.

use autotris_storage::Controls;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    Action(GameAction),
    TogglePause,
    ToggleAi,
    Restart,
    NewGame,
    CycleTheme,
    ToggleGhost,
    Quit,
}

/// Settings-style name of a key, if it has one.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase()),
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{}", c),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    Some(name)
}

/// Check if key should quit the game (with the default bindings).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(&key)
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Resolves key events through a set of controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    controls: Controls,
}

impl KeyMap {
    pub fn new(controls: Controls) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    /// Map keyboard input to a command. Key releases are ignored.
    pub fn resolve(&self, key: KeyEvent) -> Option<InputCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_interrupt(&key) {
            return Some(InputCommand::Quit);
        }

        let name = key_name(&key)?;
        if let Some(action) = self.controls.action_for(&name) {
            return Some(match action {
                GameAction::Pause | GameAction::Resume => InputCommand::TogglePause,
                other => InputCommand::Action(other),
            });
        }

        match name.as_str() {
            "KeyQ" => Some(InputCommand::Quit),
            "KeyI" => Some(InputCommand::ToggleAi),
            "KeyR" => Some(InputCommand::Restart),
            "KeyN" => Some(InputCommand::NewGame),
            "KeyT" => Some(InputCommand::CycleTheme),
            "KeyG" => Some(InputCommand::ToggleGhost),
            _ => None,
        }
    }
}
