//! Incremental search transitions.
//!
//! Each prompt key first removes the span the previous step highlighted,
//! then:
//! * query edits restart the scan from the top, going forward;
//! * Next/Previous continue from the last match in that direction;
//! * Accept keeps the cursor where it is and returns to `Idle`;
//! * Cancel puts cursor and viewport back where the search started.
//!
//! A hit moves the cursor and forces `row_offset` past the end so the next
//! scroll puts the matching row on the top line.

use super::DispatchResult;
use crate::PromptInput;
use core_model::View;
use core_state::{
    EditorState, MatchSpan, Prompt, PromptKind, SavedView, SearchDirection, SearchSession,
    SearchState, find_match,
};
use core_syntax::HighlightClass;

pub(crate) fn begin(state: &mut EditorState, view: &View) -> DispatchResult {
    let saved = SavedView {
        cx: view.cursor.cx,
        cy: view.cursor.cy,
        row_offset: view.viewport.row_offset,
        col_offset: view.viewport.col_offset,
    };
    state.search = SearchState::Searching(SearchSession::new(saved));
    state.prompt = Some(Prompt::new(PromptKind::Search));
    tracing::debug!(target: "actions.search", cy = saved.cy, cx = saved.cx, "search_begin");
    DispatchResult::dirty()
}

pub(crate) fn handle_input(
    input: PromptInput,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    clear_highlight(state);
    match input {
        PromptInput::Accept => {
            if state.prompt.as_ref().is_some_and(|p| p.input().is_empty()) {
                return DispatchResult::dirty();
            }
            state.search = SearchState::Idle;
            state.prompt = None;
            state.ephemeral_status = None;
            tracing::debug!(target: "actions.search", cy = view.cursor.cy, "search_accept");
        }
        PromptInput::Cancel => {
            if let SearchState::Searching(session) = std::mem::take(&mut state.search) {
                restore(view, session.saved);
            }
            state.prompt = None;
            state.ephemeral_status = None;
            tracing::debug!(target: "actions.search", "search_cancel");
        }
        PromptInput::Next | PromptInput::Previous => {
            if let Some(session) = state.search.session_mut() {
                session.direction = if input == PromptInput::Next {
                    SearchDirection::Forward
                } else {
                    SearchDirection::Backward
                };
            }
            step(state, view);
        }
        PromptInput::Char(_) | PromptInput::Backspace => {
            if let Some(prompt) = state.prompt.as_mut() {
                match input {
                    PromptInput::Char(c) => {
                        prompt.push(c);
                    }
                    _ => {
                        prompt.backspace();
                    }
                }
            }
            if let Some(session) = state.search.session_mut() {
                session.last_match = None;
                session.direction = SearchDirection::Forward;
            }
            step(state, view);
        }
    }
    DispatchResult::dirty()
}

fn clear_highlight(state: &mut EditorState) {
    if let Some(session) = state.search.session_mut()
        && let Some(span) = session.highlighted.take()
    {
        state.overlay.remove(&span);
    }
}

fn restore(view: &mut View, saved: SavedView) {
    view.cursor.set(saved.cx, saved.cy);
    view.viewport.row_offset = saved.row_offset;
    view.viewport.col_offset = saved.col_offset;
}

fn step(state: &mut EditorState, view: &mut View) {
    let query = state
        .prompt
        .as_ref()
        .map(|p| p.input().to_owned())
        .unwrap_or_default();
    let Some(session) = state.search.session_mut() else {
        return;
    };
    if session.last_match.is_none() {
        session.direction = SearchDirection::Forward;
    }
    let doc = &state.document;
    let Some((row, offset)) =
        find_match(doc, query.as_bytes(), session.last_match, session.direction)
    else {
        tracing::trace!(target: "actions.search", query_len = query.len(), "no_match");
        return;
    };
    session.last_match = Some(row);
    let cx = doc
        .row(row)
        .map_or(0, |r| r.rx_to_cx(offset, doc.tab_stop()));
    view.cursor.set(cx, row);
    view.viewport.row_offset = doc.row_count();
    let span = MatchSpan {
        row,
        start: offset,
        end: offset + query.len(),
    };
    state.overlay.mark(span, HighlightClass::SearchMatch);
    session.highlighted = Some(span);
}
