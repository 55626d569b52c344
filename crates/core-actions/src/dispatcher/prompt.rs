//! Prompt routing. Search prompts drive the search machine; the save-as
//! prompt collects a file name.

use super::{DispatchResult, command, search};
use crate::PromptInput;
use core_model::View;
use core_state::{EditorState, PromptKind};
use std::path::PathBuf;

pub(crate) fn handle_prompt_input(
    input: PromptInput,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match state.prompt.as_ref().map(|p| p.kind()) {
        Some(PromptKind::Search) => search::handle_input(input, state, view),
        Some(PromptKind::SaveAs) => save_as_input(input, state),
        None => DispatchResult::clean(),
    }
}

fn save_as_input(input: PromptInput, state: &mut EditorState) -> DispatchResult {
    let Some(prompt) = state.prompt.as_mut() else {
        return DispatchResult::clean();
    };
    match input {
        PromptInput::Char(c) => {
            prompt.push(c);
        }
        PromptInput::Backspace => {
            prompt.backspace();
        }
        PromptInput::Next | PromptInput::Previous => {}
        PromptInput::Cancel => {
            state.prompt = None;
            state.set_message("Save aborted");
        }
        PromptInput::Accept => {
            if prompt.input().is_empty() {
                return DispatchResult::clean();
            }
            let path = PathBuf::from(prompt.input());
            state.prompt = None;
            tracing::debug!(target: "actions.dispatch", file = %path.display(), "save_as");
            state.document.set_filename(path);
            return command::write_and_report(state);
        }
    }
    DispatchResult::dirty()
}
