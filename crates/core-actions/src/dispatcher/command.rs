//! Save and quit.

use super::DispatchResult;
use crate::io_ops::save_document;
use core_state::{EditorState, Prompt, PromptKind};

pub(crate) fn handle_save(state: &mut EditorState) -> DispatchResult {
    if state.document.filename().is_none() {
        state.prompt = Some(Prompt::new(PromptKind::SaveAs));
        return DispatchResult::dirty();
    }
    write_and_report(state)
}

/// Save to the current file name and report the outcome in the message bar.
pub(crate) fn write_and_report(state: &mut EditorState) -> DispatchResult {
    match save_document(&mut state.document) {
        Ok(n) => state.set_message(format!("{n} bytes written to disk")),
        Err(e) => state.set_message(format!("Can't save! I/O error: {e}")),
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    let decision = state.quit_guard.confirm(state.document.is_dirty());
    match decision.warning() {
        Some(warning) => {
            state.set_message(warning);
            DispatchResult::dirty()
        }
        None => {
            tracing::info!(target: "actions.dispatch", dirty = state.document.dirty(), "quit");
            DispatchResult::quit()
        }
    }
}
