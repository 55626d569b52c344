//! Owns the reusable frame buffer and drives compose + write.

use crate::compositor::compose_frame;
use crate::writer::write_frame;
use anyhow::{Context, Result};
use core_model::EditorModel;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct RenderEngine {
    buf: Vec<u8>,
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the frame for `model` into the internal buffer and return it.
    pub fn compose(&mut self, model: &EditorModel, now: Instant) -> Result<&[u8]> {
        self.buf.clear();
        compose_frame(&mut self.buf, model, now).context("composing frame")?;
        Ok(&self.buf)
    }

    /// Compose and write one frame to `out`.
    pub fn render<W: Write>(&mut self, model: &EditorModel, now: Instant, out: &mut W) -> Result<()> {
        self.compose(model, now)?;
        write_frame(out, &self.buf)?;
        self.frames += 1;
        tracing::trace!(
            target: "render",
            frame = self.frames,
            bytes = self.buf.len(),
            row_offset = model.view().viewport.row_offset,
            col_offset = model.view().viewport.col_offset,
            "frame_rendered"
        );
        Ok(())
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}
