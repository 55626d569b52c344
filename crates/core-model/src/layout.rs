//! Screen layout: the text area plus the two bottom bars.
//!
//! Invariants:
//! * The text region starts at (0,0) and spans the full width.
//! * Status bar and message bar occupy the last two rows, in that order.
//! * A terminal shorter than three rows yields an empty text region; the bars
//!   are clamped onto the rows that exist.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Rows reserved below the text area (status bar + message bar).
pub const BAR_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub text: LayoutRegion,
    pub status: LayoutRegion,
    pub message: LayoutRegion,
}

impl Layout {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let text_rows = height.saturating_sub(BAR_ROWS);
        Self {
            text: LayoutRegion::new(0, 0, width, text_rows),
            status: LayoutRegion::new(0, text_rows, width, 1),
            message: LayoutRegion::new(0, text_rows.saturating_add(1), width, 1),
        }
    }
}
