//! Text edit action handling (insert/newline/backspace/delete).
//!
//! Cursor rules: typing on the virtual line after the last row first appends
//! an empty row; every edit leaves the sticky column at the new `cx`.
//! Document errors cannot come from user input (the cursor is clamped before
//! every frame); if one does surface it is logged and the edit dropped.

use super::DispatchResult;
use crate::EditKind;
use core_model::{Cursor, View};
use core_state::EditorState;
use core_text::{Document, TextError};

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let doc = &mut state.document;
    let cursor = &mut view.cursor;
    let outcome = match kind {
        EditKind::InsertByte(byte) => insert_byte(doc, cursor, byte),
        EditKind::InsertNewline => insert_newline(doc, cursor),
        EditKind::Backspace => backspace(doc, cursor),
        EditKind::DeleteUnder => {
            cursor.move_right(doc);
            backspace(doc, cursor)
        }
    };
    match outcome {
        Ok(changed) => {
            tracing::trace!(
                target: "actions.dispatch",
                op = ?kind,
                changed,
                line = before.cy,
                col = before.cx,
                to_line = view.cursor.cy,
                to_col = view.cursor.cx,
                "edit"
            );
            DispatchResult::dirty()
        }
        Err(e) => {
            tracing::warn!(target: "actions.dispatch", op = ?kind, error = %e, "edit_rejected");
            view.cursor = before;
            DispatchResult::clean()
        }
    }
}

fn insert_byte(doc: &mut Document, cursor: &mut Cursor, byte: u8) -> Result<bool, TextError> {
    if cursor.cy == doc.row_count() {
        doc.insert_row(cursor.cy, b"")?;
    }
    doc.insert_char(cursor.cy, cursor.cx, byte)?;
    cursor.set(cursor.cx + 1, cursor.cy);
    Ok(true)
}

fn insert_newline(doc: &mut Document, cursor: &mut Cursor) -> Result<bool, TextError> {
    if cursor.cx == 0 {
        doc.insert_row(cursor.cy, b"")?;
    } else {
        doc.split_row(cursor.cy, cursor.cx)?;
    }
    cursor.set(0, cursor.cy + 1);
    Ok(true)
}

fn backspace(doc: &mut Document, cursor: &mut Cursor) -> Result<bool, TextError> {
    if cursor.cy >= doc.row_count() || (cursor.cx == 0 && cursor.cy == 0) {
        return Ok(false);
    }
    if cursor.cx > 0 {
        doc.delete_char(cursor.cy, cursor.cx - 1)?;
        cursor.set(cursor.cx - 1, cursor.cy);
    } else {
        let join_col = doc.join_with_previous(cursor.cy)?;
        cursor.set(join_col, cursor.cy - 1);
    }
    Ok(true)
}
