//! Incremental search state machine and the row scan behind it.
//!
//! `Idle` until Ctrl-F; `Searching` carries everything a cancel needs to put
//! the view back, plus the span currently shown in the overlay so the next
//! transition can remove it first.

use core_text::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Cursor and scroll position captured when the search started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedView {
    pub cx: usize,
    pub cy: usize,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// Rendered column range `[start, end)` on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub last_match: Option<usize>,
    pub direction: SearchDirection,
    pub saved: SavedView,
    pub highlighted: Option<MatchSpan>,
}

impl SearchSession {
    pub fn new(saved: SavedView) -> Self {
        Self {
            last_match: None,
            direction: SearchDirection::Forward,
            saved,
            highlighted: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching(SearchSession),
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Searching(_))
    }

    pub fn session_mut(&mut self) -> Option<&mut SearchSession> {
        match self {
            Self::Searching(session) => Some(session),
            Self::Idle => None,
        }
    }
}

/// Scan every row once, starting after `last_match` in `direction` and
/// wrapping, for `query` as a substring of the rendered text.
///
/// With no previous match the scan starts at row 0 going forward. Returns the
/// row and the rendered offset of the first hit on it.
pub fn find_match(
    doc: &Document,
    query: &[u8],
    last_match: Option<usize>,
    direction: SearchDirection,
) -> Option<(usize, usize)> {
    let n = doc.row_count();
    if n == 0 || query.is_empty() {
        return None;
    }
    for step in 1..=n {
        let idx = match (last_match, direction) {
            (None, _) => step - 1,
            (Some(last), SearchDirection::Forward) => (last.min(n - 1) + step) % n,
            (Some(last), SearchDirection::Backward) => (last.min(n - 1) + n - step % n) % n,
        };
        let Some(row) = doc.row(idx) else { continue };
        if let Some(offset) = row
            .render()
            .windows(query.len())
            .position(|window| window == query)
        {
            tracing::trace!(target: "actions.search", row = idx, offset, "match");
            return Some((idx, offset));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(lines: &[&str]) -> Document {
        let text = lines.join("\n");
        Document::from_reader(text.as_bytes(), 8).unwrap()
    }

    #[test]
    fn first_search_starts_at_top() {
        let d = doc(&["xx foo", "foo", "bar"]);
        assert_eq!(find_match(&d, b"foo", None, SearchDirection::Backward), Some((0, 3)));
    }

    #[test]
    fn forward_wraps_past_end() {
        let d = doc(&["foo", "bar", "foo bar"]);
        assert_eq!(find_match(&d, b"foo", Some(0), SearchDirection::Forward), Some((2, 0)));
        assert_eq!(find_match(&d, b"foo", Some(2), SearchDirection::Forward), Some((0, 0)));
    }

    #[test]
    fn backward_wraps_past_start() {
        let d = doc(&["foo", "bar", "foo bar"]);
        assert_eq!(find_match(&d, b"foo", Some(0), SearchDirection::Backward), Some((2, 0)));
        assert_eq!(find_match(&d, b"bar", Some(1), SearchDirection::Backward), Some((2, 4)));
    }

    #[test]
    fn single_occurrence_is_found_again_from_itself() {
        let d = doc(&["a", "needle", "b"]);
        assert_eq!(find_match(&d, b"needle", Some(1), SearchDirection::Forward), Some((1, 0)));
    }

    #[test]
    fn matches_rendered_text_not_raw() {
        let d = doc(&["\tx"]);
        assert_eq!(find_match(&d, b"  x", None, SearchDirection::Forward), Some((0, 6)));
    }

    #[test]
    fn miss_and_degenerate_inputs() {
        let d = doc(&["abc"]);
        assert_eq!(find_match(&d, b"zzz", None, SearchDirection::Forward), None);
        assert_eq!(find_match(&d, b"", None, SearchDirection::Forward), None);
        assert_eq!(find_match(&Document::default(), b"a", None, SearchDirection::Forward), None);
    }
}
