//! Frame composition and emission.
//!
//! Every frame is rebuilt from scratch into one byte buffer: the visible text
//! rows, the reverse-video status bar, the message bar, then the cursor
//! placement. The buffer is written with a single `write_all` and one flush so
//! the terminal never shows a half-drawn screen.
//!
//! Invariants:
//! * Escapes are only produced through crossterm commands queued into the buffer.
//! * Color changes are emitted at highlight-class boundaries only, never per cell.
//! * The search overlay is consulted before a row's own highlight; row
//!   highlight arrays are read-only here.
//! * The cursor is hidden for the whole frame and shown again at its end.

pub mod compositor;
pub mod render_engine;
pub mod status;
pub mod style;
pub mod writer;

pub use compositor::{WELCOME_BANNER, compose_frame};
pub use render_engine::RenderEngine;
