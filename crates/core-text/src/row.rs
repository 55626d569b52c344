//! One document row: raw bytes plus the derived render text and highlight.
//!
//! Invariants:
//! * `render.len() == highlight.len()` after every public mutation.
//! * `render` is a pure function of `raw` and the tab stop.
//! * `highlight` / `open_comment` are a pure function of `render`, the profile
//!   and the previous row's `open_comment`.
//!
//! Mutators are crate-private: `Document` is the only owner and always follows
//! a raw change with `refresh` and the highlight cascade.

use crate::coords::{logical_to_rendered, rendered_to_logical, tab_width_at};
use core_syntax::{HighlightClass, SyntaxProfile, classify_row};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<HighlightClass>,
    open_comment: bool,
}

/// Expand tabs to the next multiple of `tab_stop`; every other byte is copied as-is.
pub fn render_bytes(raw: &[u8], tab_stop: usize) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut out = Vec::with_capacity(raw.len() + tabs * tab_stop.saturating_sub(1));
    for &b in raw {
        if b == b'\t' {
            let width = tab_width_at(out.len(), tab_stop);
            out.resize(out.len() + width, b' ');
        } else {
            out.push(b);
        }
    }
    out
}

impl Row {
    pub(crate) fn new(raw: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            raw,
            ..Self::default()
        };
        row.refresh_render(tab_stop);
        row
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[HighlightClass] {
        &self.highlight
    }

    /// True when the row ends inside an unterminated block comment.
    pub fn has_open_comment(&self) -> bool {
        self.open_comment
    }

    /// Raw length in bytes (the largest valid logical column).
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        logical_to_rendered(&self.raw, cx, tab_stop)
    }

    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        rendered_to_logical(&self.raw, rx, tab_stop)
    }

    pub(crate) fn raw_mut(&mut self) -> &mut Vec<u8> {
        &mut self.raw
    }

    /// Recompute the render text; resets highlight to Normal at the new length.
    pub(crate) fn refresh_render(&mut self, tab_stop: usize) {
        self.render = render_bytes(&self.raw, tab_stop);
        self.highlight.clear();
        self.highlight
            .resize(self.render.len(), HighlightClass::Normal);
    }

    /// Re-run the classifier. Returns true when the trailing comment state changed.
    pub(crate) fn refresh_highlight(
        &mut self,
        profile: Option<&SyntaxProfile>,
        starts_in_comment: bool,
    ) -> bool {
        let ends_in_comment = match profile {
            Some(profile) => {
                let classified = classify_row(&self.render, profile, starts_in_comment);
                self.highlight = classified.highlight;
                classified.ends_in_comment
            }
            None => {
                self.highlight.clear();
                self.highlight
                    .resize(self.render.len(), HighlightClass::Normal);
                false
            }
        };
        let changed = ends_in_comment != self.open_comment;
        self.open_comment = ends_in_comment;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_leading_tab_is_one_full_stop() {
        assert_eq!(render_bytes(b"\t", 8), b"        ");
    }

    #[test]
    fn tab_fills_to_next_stop() {
        assert_eq!(render_bytes(b"ab\tc", 8), b"ab      c");
        assert_eq!(render_bytes(b"abcdefgh\tx", 8), b"abcdefgh        x");
    }

    #[test]
    fn render_is_idempotent() {
        let row = Row::new(b"\tif (x)\t{".to_vec(), 4);
        let again = render_bytes(row.raw(), 4);
        assert_eq!(row.render(), again.as_slice());
        assert_eq!(row.render_len(), row.highlight().len());
    }

    #[test]
    fn highlight_tracks_render_length() {
        let mut row = Row::new(b"a\tb".to_vec(), 8);
        assert_eq!(row.highlight().len(), 9);
        row.raw_mut().push(b'c');
        row.refresh_render(8);
        assert_eq!(row.highlight().len(), 10);
        assert!(!row.refresh_highlight(None, true));
        assert!(!row.has_open_comment());
    }

    proptest! {
        #[test]
        fn render_is_stable_for_any_tab_stop(
            raw in proptest::collection::vec(
                prop_oneof![3 => Just(b'\t'), 7 => 0x20u8..0x7f],
                0..64,
            ),
            tab_stop in 1usize..=16,
        ) {
            let row = Row::new(raw.clone(), tab_stop);
            let again = render_bytes(row.raw(), tab_stop);
            prop_assert_eq!(row.render(), again.as_slice());
            prop_assert_eq!(render_bytes(&again, tab_stop), again.clone());
            prop_assert!(!again.contains(&b'\t'));
            prop_assert_eq!(row.render_len(), logical_to_rendered(&raw, raw.len(), tab_stop));
            prop_assert_eq!(row.highlight().len(), row.render_len());
        }
    }
}
