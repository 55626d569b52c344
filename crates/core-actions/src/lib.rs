//! Document controller: key translation and the dispatcher that applies
//! `Action`s to an `EditorModel`.
//!
//! Flow per key: `translate_key` maps a `KeyEvent` to an `Action` (prompt
//! keys when a prompt is open, editing bindings otherwise), then `dispatch`
//! mutates the document, cursor, prompt or search state and reports whether
//! a redraw or quit is needed. `handle_key` bundles both steps.

use core_events::KeyEvent;
use core_model::EditorModel;

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{SaveError, save_document};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Insert one byte at the cursor (printable ASCII or tab).
    InsertByte(u8),
    InsertNewline,
    /// Delete the byte before the cursor, joining rows at column 0.
    Backspace,
    /// Delete the byte under the cursor, joining the next row at end of line.
    DeleteUnder,
}

/// Keys as seen by an open prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    Char(char),
    Backspace,
    Accept,
    Cancel,
    /// Right / Down: next match.
    Next,
    /// Left / Up: previous match.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Quit,
    Find,
    Redraw,
    Prompt(PromptInput),
}

/// Translate and dispatch one key. Unbound keys still reset the quit countdown.
pub fn handle_key(model: &mut EditorModel, key: &KeyEvent) -> DispatchResult {
    let prompt_open = model.state().prompt.is_some();
    match translate_key(prompt_open, key) {
        Some(action) => dispatch(action, model),
        None => {
            model.state_mut().quit_guard.reset();
            DispatchResult::clean()
        }
    }
}
