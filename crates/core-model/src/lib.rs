//! High-level editor model: `EditorState` plus the single `View` onto it.
//!
//! A `View` owns presentation state (cursor, scroll offsets, visible size)
//! that does not belong to the document. The dispatcher receives the whole
//! `EditorModel` by `&mut` and uses `split_mut` when it needs the document and
//! the cursor at once.
//!
//! Invariants (after `refresh_view`, which runs before every frame):
//! * `cursor.cy <= row_count` and `cursor.cx <= row length` (0 on the virtual line).
//! * `cursor.rx` is the rendered column of `cursor.cx`.
//! * The cursor lies inside the viewport.

use core_state::EditorState;
use core_text::Document;

mod cursor;
mod layout;
mod viewport;

pub use cursor::Cursor;
pub use layout::{BAR_ROWS, Layout, LayoutRegion};
pub use viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub layout: Layout,
}

impl View {
    /// View sized for a terminal of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        let layout = Layout::for_terminal(cols, rows);
        Self {
            cursor: Cursor::default(),
            viewport: Viewport::new(layout.text.height as usize, layout.text.width as usize),
            layout,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        let layout = Layout::for_terminal(cols, rows);
        self.viewport
            .resize(layout.text.height as usize, layout.text.width as usize);
        self.layout = layout;
    }

    /// Cursor to the top visible row, then a screen of upward moves.
    pub fn page_up(&mut self, doc: &Document) {
        self.cursor.cy = self.viewport.row_offset;
        self.cursor.clamp(doc);
        for _ in 0..self.viewport.rows_visible {
            self.cursor.move_up(doc);
        }
    }

    /// Cursor to the bottom visible row, then a screen of downward moves.
    pub fn page_down(&mut self, doc: &Document) {
        let bottom = (self.viewport.row_offset + self.viewport.rows_visible).saturating_sub(1);
        self.cursor.cy = bottom.min(doc.row_count());
        self.cursor.clamp(doc);
        for _ in 0..self.viewport.rows_visible {
            self.cursor.move_down(doc);
        }
    }

    /// Clamp the cursor, refresh `rx` and scroll it into view. Returns true when the viewport moved.
    pub fn refresh(&mut self, doc: &Document) -> bool {
        self.cursor.clamp(doc);
        self.cursor.update_rx(doc);
        self.viewport.scroll(self.cursor.cy, self.cursor.rx)
    }
}

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, view: View) -> Self {
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    /// Disjoint mutable borrows of the state and the view.
    pub fn split_mut(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Run before composing a frame.
    pub fn refresh_view(&mut self) -> bool {
        self.view.refresh(&self.state.document)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.view.resize(cols, rows);
        self.refresh_view();
    }
}
