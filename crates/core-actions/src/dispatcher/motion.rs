//! Motion sub-dispatch (cursor movement).
//!
//! Only the cursor changes here; scrolling follows in `View::refresh` before
//! the next frame.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &EditorState,
    view: &mut View,
) -> DispatchResult {
    let doc = &state.document;
    let before = view.cursor;
    match kind {
        MotionKind::Left => view.cursor.move_left(doc),
        MotionKind::Right => view.cursor.move_right(doc),
        MotionKind::Up => view.cursor.move_up(doc),
        MotionKind::Down => view.cursor.move_down(doc),
        MotionKind::LineStart => view.cursor.home(),
        MotionKind::LineEnd => view.cursor.end(doc),
        MotionKind::PageUp => view.page_up(doc),
        MotionKind::PageDown => view.page_down(doc),
    }
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        line = before.cy,
        col = before.cx,
        to_line = view.cursor.cy,
        to_col = view.cursor.cx,
        "motion"
    );
    DispatchResult::dirty()
}
