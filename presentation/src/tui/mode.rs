//! Key bindings for the directory browser
//!
//! There is a single input mode: printable keys edit the search box, and
//! navigation keys page through the directory.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character to the search
    InsertChar(char),
    /// Delete the last search character (Backspace)
    DeleteChar,
    /// Clear the search and show the whole page
    ResetSearch,
    /// Go to the previous page
    PreviousPage,
    /// Go to the next page
    NextPage,
    /// Jump to page 1
    FirstPage,
    /// Jump to the last page
    LastPage,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    /// Handle a key event. `search_empty` decides what Esc does.
    pub fn handle(key: KeyEvent, search_empty: bool) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => KeyAction::ResetSearch,
            (KeyCode::Esc, _) if search_empty => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::ResetSearch,

            (KeyCode::Left | KeyCode::PageUp, _) => KeyAction::PreviousPage,
            (KeyCode::Right | KeyCode::PageDown, _) => KeyAction::NextPage,
            (KeyCode::Home, _) => KeyAction::FirstPage,
            (KeyCode::End, _) => KeyAction::LastPage,

            (KeyCode::Backspace, _) => KeyAction::DeleteChar,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                KeyAction::InsertChar(c)
            }

            _ => KeyAction::None,
        }
    }

    /// One-line key hints for the status bar
    pub fn hints() -> &'static str {
        "type:search  ←/→:page  Home/End:first/last  Ctrl+R:reset  Esc:quit"
    }
}
