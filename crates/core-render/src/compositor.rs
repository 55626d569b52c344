//! Builds one frame into a byte buffer.

use crate::status::{StatusContext, format_status};
use crate::style::{color_for, control_symbol};
use core_model::EditorModel;
use core_state::{EditorState, HighlightOverlay};
use core_syntax::HighlightClass;
use core_text::Row;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Instant;

pub const WELCOME_BANNER: &str = concat!("Kiln editor -- version ", env!("CARGO_PKG_VERSION"));

/// Append the full frame for `model` to `buf`. `now` decides whether the transient message is still shown.
pub fn compose_frame(buf: &mut Vec<u8>, model: &EditorModel, now: Instant) -> io::Result<()> {
    queue!(buf, Hide, MoveTo(0, 0))?;
    draw_rows(buf, model)?;
    draw_status_bar(buf, model)?;
    draw_message_bar(buf, model.state(), model.view().layout.message.width as usize, now)?;

    let view = model.view();
    let x = view.cursor.rx.saturating_sub(view.viewport.col_offset);
    let y = view.cursor.cy.saturating_sub(view.viewport.row_offset);
    queue!(buf, MoveTo(to_u16(x), to_u16(y)), Show)?;
    Ok(())
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_rows(buf: &mut Vec<u8>, model: &EditorModel) -> io::Result<()> {
    let doc = model.document();
    let vp = model.view().viewport;
    for y in 0..vp.rows_visible {
        let file_row = y + vp.row_offset;
        match doc.row(file_row) {
            Some(row) => draw_text_row(
                buf,
                row,
                file_row,
                &model.state().overlay,
                vp.col_offset,
                vp.cols_visible,
            )?,
            None if doc.row_count() == 0 && y == vp.rows_visible / 3 => {
                draw_welcome(buf, vp.cols_visible)
            }
            None => buf.push(b'~'),
        }
        queue!(buf, Clear(ClearType::UntilNewLine))?;
        buf.extend_from_slice(b"\r\n");
    }
    Ok(())
}

fn draw_welcome(buf: &mut Vec<u8>, width: usize) {
    let banner = &WELCOME_BANNER.as_bytes()[..WELCOME_BANNER.len().min(width)];
    let mut padding = (width - banner.len()) / 2;
    if padding > 0 {
        buf.push(b'~');
        padding -= 1;
    }
    buf.resize(buf.len() + padding, b' ');
    buf.extend_from_slice(banner);
}

fn draw_text_row(
    buf: &mut Vec<u8>,
    row: &Row,
    file_row: usize,
    overlay: &HighlightOverlay,
    col_offset: usize,
    width: usize,
) -> io::Result<()> {
    let render = row.render();
    let highlight = row.highlight();
    let start = col_offset.min(render.len());
    let end = (col_offset + width).min(render.len());

    let mut current: Option<Color> = None;
    for col in start..end {
        let byte = render[col];
        if byte.is_ascii_control() {
            queue!(buf, SetAttribute(Attribute::Reverse))?;
            buf.push(control_symbol(byte));
            queue!(buf, SetAttribute(Attribute::Reset))?;
            // Reset dropped the active color.
            if let Some(color) = current {
                queue!(buf, SetForegroundColor(color))?;
            }
            continue;
        }
        let class = overlay
            .class_at(file_row, col)
            .unwrap_or_else(|| highlight.get(col).copied().unwrap_or(HighlightClass::Normal));
        let wanted = color_for(class);
        if wanted != current {
            queue!(buf, SetForegroundColor(wanted.unwrap_or(Color::Reset)))?;
            current = wanted;
        }
        buf.push(byte);
    }
    queue!(buf, SetForegroundColor(Color::Reset))?;
    Ok(())
}

fn draw_status_bar(buf: &mut Vec<u8>, model: &EditorModel) -> io::Result<()> {
    let doc = model.document();
    let ctx = StatusContext {
        file_name: doc.filename(),
        line_count: doc.row_count(),
        dirty: doc.is_dirty(),
        filetype: doc.syntax().map(|profile| profile.name),
        line: model.view().cursor.cy,
    };
    let line = format_status(&ctx, model.view().layout.status.width as usize);
    queue!(buf, SetAttribute(Attribute::Reverse))?;
    buf.extend_from_slice(line.as_bytes());
    queue!(buf, SetAttribute(Attribute::Reset))?;
    buf.extend_from_slice(b"\r\n");
    Ok(())
}

fn draw_message_bar(
    buf: &mut Vec<u8>,
    state: &EditorState,
    width: usize,
    now: Instant,
) -> io::Result<()> {
    queue!(buf, Clear(ClearType::UntilNewLine))?;
    let prompt_text = state.prompt.as_ref().map(|p| p.display());
    let text = prompt_text.as_deref().or_else(|| state.message_at(now));
    if let Some(text) = text {
        let shown: String = text.chars().take(width).collect();
        buf.extend_from_slice(shown.as_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_banner_is_centered_with_tilde() {
        let mut buf = Vec::new();
        let width = WELCOME_BANNER.len() + 10;
        draw_welcome(&mut buf, width);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('~'));
        assert_eq!(text.len(), 5 + WELCOME_BANNER.len());
        assert!(text.ends_with(WELCOME_BANNER));
    }

    #[test]
    fn welcome_banner_truncates_to_width() {
        let mut buf = Vec::new();
        draw_welcome(&mut buf, 4);
        assert_eq!(buf, b"Kiln");
    }
}
