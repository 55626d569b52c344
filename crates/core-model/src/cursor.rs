//! Cursor position and motion over a `Document`.
//!
//! `cy` may equal `row_count()`: the virtual line after the last row.
//! `desired_col` is the sticky column: vertical moves keep it and snap `cx` to
//! `min(desired_col, row length)`; every other motion resets it to `cx`.

use core_text::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    /// Rendered column of `cx`; refreshed before every frame.
    pub rx: usize,
    desired_col: usize,
}

impl Cursor {
    pub fn at(cx: usize, cy: usize) -> Self {
        Self {
            cx,
            cy,
            rx: cx,
            desired_col: cx,
        }
    }

    pub fn desired_col(&self) -> usize {
        self.desired_col
    }

    /// Jump to (`cx`, `cy`) and make `cx` the new sticky column.
    pub fn set(&mut self, cx: usize, cy: usize) {
        self.cx = cx;
        self.cy = cy;
        self.desired_col = cx;
    }

    /// Keep `cy` within `0..=row_count` and `cx` within the row.
    pub fn clamp(&mut self, doc: &Document) {
        self.cy = self.cy.min(doc.row_count());
        self.cx = self.cx.min(doc.row_len(self.cy));
    }

    pub fn move_left(&mut self, doc: &Document) {
        if self.cx > 0 {
            self.cx -= 1;
        } else if self.cy > 0 {
            self.cy -= 1;
            self.cx = doc.row_len(self.cy);
        }
        self.desired_col = self.cx;
    }

    pub fn move_right(&mut self, doc: &Document) {
        if let Some(row) = doc.row(self.cy) {
            if self.cx < row.len() {
                self.cx += 1;
            } else {
                self.cy += 1;
                self.cx = 0;
            }
        }
        self.desired_col = self.cx;
    }

    pub fn move_up(&mut self, doc: &Document) {
        self.cy = self.cy.saturating_sub(1);
        self.snap(doc);
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.cy < doc.row_count() {
            self.cy += 1;
        }
        self.snap(doc);
    }

    pub fn home(&mut self) {
        self.cx = 0;
        self.desired_col = 0;
    }

    pub fn end(&mut self, doc: &Document) {
        self.cx = doc.row_len(self.cy);
        self.desired_col = self.cx;
    }

    /// Recompute `rx` from `cx` on the current row.
    pub fn update_rx(&mut self, doc: &Document) {
        self.rx = doc
            .row(self.cy)
            .map_or(0, |row| row.cx_to_rx(self.cx, doc.tab_stop()));
    }

    fn snap(&mut self, doc: &Document) {
        self.cx = self.desired_col.min(doc.row_len(self.cy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_reader(lines.join("\n").as_bytes(), 8).unwrap()
    }

    #[test]
    fn left_wraps_to_previous_row_end() {
        let d = doc(&["abc", "de"]);
        let mut c = Cursor::at(0, 1);
        c.move_left(&d);
        assert_eq!((c.cx, c.cy), (3, 0));
        let mut origin = Cursor::default();
        origin.move_left(&d);
        assert_eq!((origin.cx, origin.cy), (0, 0));
    }

    #[test]
    fn right_wraps_to_next_row_start() {
        let d = doc(&["ab", "c"]);
        let mut c = Cursor::at(2, 0);
        c.move_right(&d);
        assert_eq!((c.cx, c.cy), (0, 1));
        // right on the last row's end reaches the virtual line, then stops
        c.set(1, 1);
        c.move_right(&d);
        assert_eq!((c.cx, c.cy), (0, 2));
        c.move_right(&d);
        assert_eq!((c.cx, c.cy), (0, 2));
    }

    #[test]
    fn vertical_moves_keep_sticky_column() {
        let d = doc(&["long line here", "ab", "another long one"]);
        let mut c = Cursor::at(10, 0);
        c.move_down(&d);
        assert_eq!((c.cx, c.cy), (2, 1));
        c.move_down(&d);
        assert_eq!((c.cx, c.cy), (10, 2));
        assert_eq!(c.desired_col(), 10);
    }

    #[test]
    fn horizontal_move_resets_sticky_column() {
        let d = doc(&["long line here", "ab", "another long one"]);
        let mut c = Cursor::at(10, 0);
        c.move_down(&d);
        c.move_left(&d);
        c.move_down(&d);
        assert_eq!((c.cx, c.cy), (1, 2));
    }

    #[test]
    fn down_reaches_virtual_line_only() {
        let d = doc(&["x"]);
        let mut c = Cursor::at(1, 0);
        c.move_down(&d);
        assert_eq!((c.cx, c.cy), (0, 1));
        c.move_down(&d);
        assert_eq!(c.cy, 1);
        c.move_up(&d);
        assert_eq!((c.cx, c.cy), (1, 0));
    }

    #[test]
    fn home_end_and_rx() {
        let d = doc(&["\tab"]);
        let mut c = Cursor::default();
        c.end(&d);
        assert_eq!(c.cx, 3);
        c.update_rx(&d);
        assert_eq!(c.rx, 10);
        c.home();
        c.update_rx(&d);
        assert_eq!((c.cx, c.rx), (0, 0));
    }

    #[test]
    fn clamp_pulls_cursor_back_into_document() {
        let d = doc(&["ab"]);
        let mut c = Cursor::at(9, 5);
        c.clamp(&d);
        assert_eq!((c.cx, c.cy), (0, 1));
        let mut c = Cursor::at(9, 0);
        c.clamp(&d);
        assert_eq!((c.cx, c.cy), (2, 0));
    }
}
