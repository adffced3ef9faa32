//! View-agnostic key events and the console's fixed key bindings.
//!
//! A host maps its native keyboard input to [`KeyEvent`]s. Each event is a
//! single key-down edge; holding a key does not repeat it. The session never
//! sees raw platform input.

use serde::{Deserialize, Serialize};

/// Keys the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// The backquote / tilde key.
    Backquote,
    Enter,
    Up,
    Down,
    Tab,
    Backspace,
    /// A printable character typed into the input field.
    Char(char),
}

/// A single key-down edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// What the console does in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    ToggleVisibility,
    Submit,
    RecallOlder,
    RecallNewer,
    Complete,
    /// Insert a character at the caret.
    Insert(char),
    /// Delete the character before the caret.
    DeleteBack,
}

impl ConsoleAction {
    /// Resolve a key event through the fixed bindings.
    pub fn from_key(event: KeyEvent) -> Self {
        match event.key {
            Key::Backquote => Self::ToggleVisibility,
            Key::Enter => Self::Submit,
            Key::Up => Self::RecallOlder,
            Key::Down => Self::RecallNewer,
            Key::Tab => Self::Complete,
            Key::Backspace => Self::DeleteBack,
            Key::Char(ch) => Self::Insert(ch),
        }
    }
}
