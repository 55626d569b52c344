//! File write path for Ctrl-S.
//!
//! Synchronous: serialize, create/truncate, write every byte, then compare
//! the file length with the serialized length. The document is only marked
//! clean once all of that succeeded.

use core_text::Document;
use std::fs::File;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no file name")]
    NoFilename,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("short write ({written} of {expected} bytes)")]
    ShortWrite { expected: u64, written: u64 },
}

/// Write `doc` to its file name. Returns the number of bytes written.
pub fn save_document(doc: &mut Document) -> Result<usize, SaveError> {
    let path = doc.filename().ok_or(SaveError::NoFilename)?.to_path_buf();
    let bytes = doc.serialize();
    let result = write_exact(&path, &bytes);
    match &result {
        Ok(()) => {
            doc.mark_clean();
            tracing::info!(target: "io", file = %path.display(), bytes = bytes.len(), "save");
        }
        Err(e) => {
            tracing::error!(target: "io", file = %path.display(), error = %e, "file_write_error");
        }
    }
    result.map(|()| bytes.len())
}

fn write_exact(path: &std::path::Path, bytes: &[u8]) -> Result<(), SaveError> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    let written = file.metadata()?.len();
    let expected = bytes.len() as u64;
    if written != expected {
        return Err(SaveError::ShortWrite { expected, written });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(text: &str) -> Document {
        Document::from_reader(text.as_bytes(), 8).unwrap()
    }

    #[test]
    fn writes_serialized_bytes_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut doc = doc_with("a\r\nb");
        doc.set_filename(path.clone());
        doc.insert_char(0, 1, b'!').unwrap();
        assert!(doc.is_dirty());

        let n = save_document(&mut doc).unwrap();
        assert_eq!(n, 5);
        assert!(!doc.is_dirty());
        assert_eq!(std::fs::read(&path).unwrap(), b"a!\nb\n");
    }

    #[test]
    fn truncates_longer_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "a much longer previous body\n").unwrap();
        let mut doc = doc_with("short");
        doc.set_filename(path.clone());
        save_document(&mut doc).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short\n");
    }

    #[test]
    fn no_filename() {
        let mut doc = doc_with("x");
        doc.insert_char(0, 0, b'y').unwrap();
        assert!(matches!(save_document(&mut doc), Err(SaveError::NoFilename)));
        assert!(doc.is_dirty(), "dirty unchanged when no filename");
    }

    #[test]
    fn io_failure_keeps_document_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = doc_with("x");
        doc.set_filename(dir.path().join("missing").join("out.txt"));
        doc.insert_char(0, 0, b'y').unwrap();
        assert!(matches!(save_document(&mut doc), Err(SaveError::Io(_))));
        assert!(doc.is_dirty());
    }
}
