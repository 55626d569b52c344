//! Terminal size query with a cursor-position fallback.
//!
//! The direct query can fail (or report zero columns) on some terminals and
//! pseudo-terminals. The fallback pushes the cursor far to the bottom-right,
//! where the terminal clamps it to the last cell, and asks for its position.

use crossterm::{
    cursor::{MoveDown, MoveRight},
    queue,
};
use std::io::{self, Write, stdout};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("unable to determine terminal size")]
    QueryFailure(#[source] io::Error),
}

/// (columns, rows) of the controlling terminal.
pub fn terminal_size() -> Result<(u16, u16), TerminalError> {
    resolve_size(crossterm::terminal::size, size_from_cursor)
}

/// Use `direct` unless it fails or reports zero columns, then `fallback`.
pub fn resolve_size<D, P>(direct: D, fallback: P) -> Result<(u16, u16), TerminalError>
where
    D: FnOnce() -> io::Result<(u16, u16)>,
    P: FnOnce() -> io::Result<(u16, u16)>,
{
    match direct() {
        Ok((cols, rows)) if cols > 0 => return Ok((cols, rows)),
        Ok(_) => tracing::debug!(target: "terminal", "size_zero_columns_probing"),
        Err(e) => tracing::debug!(target: "terminal", error = %e, "size_query_failed_probing"),
    }
    let size = fallback().map_err(TerminalError::QueryFailure)?;
    tracing::debug!(target: "terminal", cols = size.0, rows = size.1, "size_from_cursor");
    Ok(size)
}

fn size_from_cursor() -> io::Result<(u16, u16)> {
    let mut out = stdout();
    queue!(out, MoveRight(999), MoveDown(999))?;
    out.flush()?;
    let (col, row) = crossterm::cursor::position()?;
    Ok((col.saturating_add(1), row.saturating_add(1)))
}
