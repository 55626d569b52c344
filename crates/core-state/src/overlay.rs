//! Presentation-only highlight layer drawn over the rows' base highlight.
//!
//! The compositor asks the overlay first and falls back to the row's own
//! classes; rows are never recolored in place, so removing a span restores the
//! syntax colors with no bookkeeping.

use crate::search::MatchSpan;
use core_syntax::HighlightClass;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOverlay {
    spans: Vec<(MatchSpan, HighlightClass)>,
}

impl HighlightOverlay {
    pub fn mark(&mut self, span: MatchSpan, class: HighlightClass) {
        self.spans.push((span, class));
    }

    pub fn remove(&mut self, span: &MatchSpan) {
        self.spans.retain(|(s, _)| s != span);
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Class for rendered column `col` of `row`; the most recently marked span wins.
    pub fn class_at(&self, row: usize, col: usize) -> Option<HighlightClass> {
        self.spans
            .iter()
            .rev()
            .find(|(s, _)| s.row == row && (s.start..s.end).contains(&col))
            .map(|(_, class)| *class)
    }
}
