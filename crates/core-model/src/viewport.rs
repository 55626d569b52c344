//! Scroll offsets for the text area.

/// Visible window over the document, in rows and rendered columns.
///
/// After `scroll`, the cursor row lies in `[row_offset, row_offset + rows_visible)`
/// and the rendered cursor column in `[col_offset, col_offset + cols_visible)`.
/// Scrolling is minimal: the window moves just enough, never recenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub rows_visible: usize,
    pub cols_visible: usize,
}

impl Viewport {
    pub fn new(rows_visible: usize, cols_visible: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows_visible,
            cols_visible,
        }
    }

    pub fn resize(&mut self, rows_visible: usize, cols_visible: usize) {
        tracing::debug!(target: "model.viewport", rows_visible, cols_visible, "resize");
        self.rows_visible = rows_visible;
        self.cols_visible = cols_visible;
    }

    /// Bring (`cy`, `rx`) into view. Returns true when an offset changed.
    pub fn scroll(&mut self, cy: usize, rx: usize) -> bool {
        let before = (self.row_offset, self.col_offset);
        self.row_offset = clamp_axis(self.row_offset, cy, self.rows_visible);
        self.col_offset = clamp_axis(self.col_offset, rx, self.cols_visible);
        before != (self.row_offset, self.col_offset)
    }
}

fn clamp_axis(offset: usize, pos: usize, visible: usize) -> usize {
    if pos < offset {
        pos
    } else if pos >= offset + visible {
        pos + 1 - visible.max(1)
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_down_minimally() {
        let mut vp = Viewport::new(10, 80);
        assert!(vp.scroll(25, 0));
        assert_eq!(vp.row_offset, 16);
        assert!(!vp.scroll(20, 0));
        assert_eq!(vp.row_offset, 16);
    }

    #[test]
    fn scrolls_up_to_cursor_row() {
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 30;
        vp.scroll(12, 0);
        assert_eq!(vp.row_offset, 12);
    }

    #[test]
    fn horizontal_uses_rendered_column() {
        let mut vp = Viewport::new(10, 20);
        vp.scroll(0, 20);
        assert_eq!(vp.col_offset, 1);
        vp.scroll(0, 3);
        assert_eq!(vp.col_offset, 1);
        vp.scroll(0, 0);
        assert_eq!(vp.col_offset, 0);
    }

    #[test]
    fn forced_offset_puts_target_row_on_top() {
        // search forces row_offset past the end so the next scroll lands the match at the top
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 500;
        vp.scroll(42, 0);
        assert_eq!(vp.row_offset, 42);
    }

    #[test]
    fn zero_sized_window_tracks_cursor() {
        let mut vp = Viewport::new(0, 0);
        vp.scroll(7, 3);
        assert_eq!((vp.row_offset, vp.col_offset), (7, 3));
    }
}
