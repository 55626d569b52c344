//! Frame emission.
//!
//! One `write_all` per frame followed by one flush; nothing else reaches the
//! terminal between frames.

use anyhow::{Context, Result};
use std::io::Write;

pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> Result<()> {
    out.write_all(frame).context("writing frame")?;
    out.flush().context("flushing frame")?;
    tracing::trace!(target: "render", bytes = frame.len(), "frame_written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: usize,
        flushes: usize,
        bytes: Vec<u8>,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn single_write_and_flush() {
        let mut out = Recorder::default();
        write_frame(&mut out, b"\x1b[?25lhello").unwrap();
        assert_eq!(out.writes, 1);
        assert_eq!(out.flushes, 1);
        assert_eq!(out.bytes, b"\x1b[?25lhello");
    }
}
