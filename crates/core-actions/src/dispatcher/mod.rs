//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation (insert/newline/backspace/delete)
//! * `command` - save and quit
//! * `prompt`  - save-as prompt line editing
//! * `search`  - incremental search transitions
//!
//! Every action except `Quit` resets the quit countdown.

use crate::Action;
use core_model::EditorModel;

mod command;
mod edit;
mod motion;
mod prompt;
mod search;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// A redraw is needed.
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to the model. Returns whether a render is needed (`dirty`)
/// or the editor should exit (`quit`).
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_mut();
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    if action == Action::Quit {
        return command::handle_quit(state);
    }
    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Save => command::handle_save(state),
        Action::Find => search::begin(state, view),
        Action::Prompt(input) => prompt::handle_prompt_input(input, state, view),
        Action::Redraw | Action::Quit => DispatchResult::dirty(),
    };
    state.quit_guard.reset();
    result
}
