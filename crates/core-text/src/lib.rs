//! Row-oriented text document.
//!
//! `Document` is the single owner of every `Row`. All mutations go through it
//! so that each raw edit is immediately followed by a re-render of the touched
//! row and the highlight cascade; callers can never observe a row whose render
//! or highlight lags its raw bytes.
//!
//! Highlight cascade: a row is classified with its predecessor's trailing
//! block-comment state. Structural edits re-classify every row whose content or
//! predecessor changed, then keep walking down while a row's trailing state
//! flips. The result always equals a full top-to-bottom classification.
//!
//! Load / serialize: lines split on `\n`, trailing `\r`/`\n` stripped, and the
//! serializer writes every row followed by a single `\n`. CRLF input therefore
//! round-trips as LF.

use core_syntax::{BUILTIN_PROFILES, SyntaxProfile, select_profile};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod coords;
pub mod row;

pub use coords::{logical_to_rendered, rendered_to_logical};
pub use row::{Row, render_bytes};

pub const DEFAULT_TAB_STOP: usize = 8;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn out_of_range(index: usize, len: usize) -> TextError {
    tracing::warn!(target: "text.rows", index, len, "index_out_of_range");
    TextError::IndexOutOfRange { index, len }
}

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    filename: Option<PathBuf>,
    dirty: usize,
    syntax: Option<&'static SyntaxProfile>,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            filename: None,
            dirty: 0,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build an unnamed document from a byte stream.
    pub fn from_reader<R: BufRead>(reader: R, tab_stop: usize) -> Result<Self, TextError> {
        let mut doc = Self::new(tab_stop);
        doc.load_rows(reader)?;
        Ok(doc)
    }

    /// Open `path`, selecting the syntax profile from its name before rows are classified.
    pub fn open(path: &Path, tab_stop: usize) -> Result<Self, TextError> {
        let file = File::open(path)?;
        let mut doc = Self::new(tab_stop);
        doc.filename = Some(path.to_path_buf());
        doc.syntax = select_profile(BUILTIN_PROFILES, path);
        doc.load_rows(BufReader::new(file))?;
        tracing::debug!(
            target: "io",
            file = %path.display(),
            rows = doc.rows.len(),
            syntax = doc.syntax.map(|s| s.name),
            "document_open"
        );
        Ok(doc)
    }

    fn load_rows<R: BufRead>(&mut self, mut reader: R) -> Result<(), TextError> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            self.insert_row(self.rows.len(), &line)?;
        }
        self.dirty = 0;
        Ok(())
    }

    /// Every row followed by a single `\n`.
    pub fn serialize(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Raw length of row `idx`, or 0 past the end (the virtual line after the last row).
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    /// Number of mutations since the last load or save.
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Rename the document; the syntax profile is re-selected and every row re-classified.
    pub fn set_filename(&mut self, path: PathBuf) {
        let profile = select_profile(BUILTIN_PROFILES, &path);
        self.filename = Some(path);
        self.set_syntax(profile);
    }

    pub fn set_syntax(&mut self, profile: Option<&'static SyntaxProfile>) {
        self.syntax = profile;
        self.rehighlight(0, self.rows.len());
    }

    pub fn insert_row(&mut self, at: usize, bytes: &[u8]) -> Result<(), TextError> {
        if at > self.rows.len() {
            return Err(out_of_range(at, self.rows.len()));
        }
        self.rows.insert(at, Row::new(bytes.to_vec(), self.tab_stop));
        self.rehighlight(at, at + 1);
        self.dirty += 1;
        Ok(())
    }

    pub fn delete_row(&mut self, at: usize) -> Result<(), TextError> {
        if at >= self.rows.len() {
            return Err(out_of_range(at, self.rows.len()));
        }
        self.rows.remove(at);
        self.rehighlight(at, at);
        self.dirty += 1;
        Ok(())
    }

    /// Insert `byte` before logical column `col` (`col == len` appends).
    pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) -> Result<(), TextError> {
        let len = self.checked_row(row)?.len();
        if col > len {
            return Err(out_of_range(col, len));
        }
        self.rows[row].raw_mut().insert(col, byte);
        self.refresh_row(row);
        Ok(())
    }

    pub fn delete_char(&mut self, row: usize, col: usize) -> Result<(), TextError> {
        let len = self.checked_row(row)?.len();
        if col >= len {
            return Err(out_of_range(col, len));
        }
        self.rows[row].raw_mut().remove(col);
        self.refresh_row(row);
        Ok(())
    }

    pub fn append_bytes(&mut self, row: usize, bytes: &[u8]) -> Result<(), TextError> {
        self.checked_row(row)?;
        self.rows[row].raw_mut().extend_from_slice(bytes);
        self.refresh_row(row);
        Ok(())
    }

    /// Move bytes `[col..]` of `row` into a new row directly below it.
    pub fn split_row(&mut self, row: usize, col: usize) -> Result<(), TextError> {
        let len = self.checked_row(row)?.len();
        if col > len {
            return Err(out_of_range(col, len));
        }
        let tail = self.rows[row].raw_mut().split_off(col);
        self.rows[row].refresh_render(self.tab_stop);
        self.rows.insert(row + 1, Row::new(tail, self.tab_stop));
        self.rehighlight(row, row + 2);
        self.dirty += 1;
        Ok(())
    }

    /// Append `row` to the row above it and remove `row`.
    ///
    /// Returns the previous row's former length: the column where the joined
    /// text starts.
    pub fn join_with_previous(&mut self, row: usize) -> Result<usize, TextError> {
        if row == 0 || row >= self.rows.len() {
            return Err(out_of_range(row, self.rows.len()));
        }
        let removed = self.rows.remove(row);
        let prev = &mut self.rows[row - 1];
        let join_col = prev.len();
        prev.raw_mut().extend_from_slice(removed.raw());
        prev.refresh_render(self.tab_stop);
        self.rehighlight(row - 1, row);
        self.dirty += 1;
        tracing::trace!(target: "text.rows", row, join_col, "join_with_previous");
        Ok(join_col)
    }

    fn checked_row(&self, row: usize) -> Result<&Row, TextError> {
        self.rows
            .get(row)
            .ok_or_else(|| out_of_range(row, self.rows.len()))
    }

    fn refresh_row(&mut self, row: usize) {
        self.rows[row].refresh_render(self.tab_stop);
        self.rehighlight(row, row);
        self.dirty += 1;
    }

    /// Re-classify rows `first..=last` unconditionally, then continue while the
    /// trailing comment state keeps changing.
    fn rehighlight(&mut self, first: usize, last: usize) {
        let mut idx = first;
        while idx < self.rows.len() {
            let starts_in_comment = idx > 0 && self.rows[idx - 1].has_open_comment();
            let changed = self.rows[idx].refresh_highlight(self.syntax, starts_in_comment);
            if idx >= last && !changed {
                break;
            }
            idx += 1;
        }
        if idx > last + 1 {
            tracing::trace!(target: "syntax", first, last, reached = idx, "highlight_cascade");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_syntax::HighlightClass;

    fn doc_of(lines: &[&str]) -> Document {
        let mut doc = Document::new(8);
        for (i, l) in lines.iter().enumerate() {
            doc.insert_row(i, l.as_bytes()).unwrap();
        }
        doc
    }

    fn raw_rows(doc: &Document) -> Vec<String> {
        doc.rows()
            .iter()
            .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
            .collect()
    }

    #[test]
    fn insert_row_bounds() {
        let mut doc = doc_of(&["a"]);
        assert!(matches!(
            doc.insert_row(3, b"x"),
            Err(TextError::IndexOutOfRange { index: 3, len: 1 })
        ));
        doc.insert_row(1, b"b").unwrap();
        doc.insert_row(0, b"z").unwrap();
        assert_eq!(raw_rows(&doc), ["z", "a", "b"]);
    }

    #[test]
    fn out_of_range_edits_leave_document_untouched() {
        let mut doc = doc_of(&["ab"]);
        let dirty = doc.dirty();
        assert!(doc.delete_row(1).is_err());
        assert!(doc.insert_char(0, 3, b'x').is_err());
        assert!(doc.delete_char(0, 2).is_err());
        assert!(doc.append_bytes(4, b"x").is_err());
        assert!(doc.join_with_previous(0).is_err());
        assert_eq!(raw_rows(&doc), ["ab"]);
        assert_eq!(doc.dirty(), dirty);
    }

    #[test]
    fn every_mutation_bumps_dirty_and_rerenders() {
        let mut doc = doc_of(&["ab"]);
        doc.mark_clean();
        doc.insert_char(0, 1, b'\t').unwrap();
        assert_eq!(doc.row(0).unwrap().render(), b"a       b");
        doc.delete_char(0, 1).unwrap();
        assert_eq!(doc.row(0).unwrap().render(), b"ab");
        doc.append_bytes(0, b"cd").unwrap();
        assert_eq!(doc.row(0).unwrap().render(), b"abcd");
        assert_eq!(doc.dirty(), 3);
    }

    #[test]
    fn split_row_moves_tail_down() {
        let mut doc = doc_of(&["ab"]);
        doc.split_row(0, 1).unwrap();
        assert_eq!(raw_rows(&doc), ["a", "b"]);
        doc.split_row(1, 0).unwrap();
        assert_eq!(raw_rows(&doc), ["a", "", "b"]);
    }

    #[test]
    fn join_returns_previous_length() {
        let mut doc = doc_of(&["abc", "", "de"]);
        assert_eq!(doc.join_with_previous(2).unwrap(), 0);
        assert_eq!(doc.join_with_previous(1).unwrap(), 3);
        assert_eq!(raw_rows(&doc), ["abcde"]);
        let row = doc.row(0).unwrap();
        assert_eq!(row.render(), b"abcde");
        assert_eq!(row.highlight().len(), 5);
    }

    #[test]
    fn load_strips_line_endings_and_is_clean() {
        let doc = Document::from_reader(&b"one\r\ntwo\n\nlast"[..], 8).unwrap();
        assert_eq!(raw_rows(&doc), ["one", "two", "", "last"]);
        assert!(!doc.is_dirty());
        assert_eq!(doc.serialize(), b"one\ntwo\n\nlast\n");
    }

    #[test]
    fn empty_stream_has_no_rows() {
        let doc = Document::from_reader(&b""[..], 8).unwrap();
        assert_eq!(doc.row_count(), 0);
        assert!(doc.serialize().is_empty());
    }

    #[test]
    fn no_profile_means_all_normal() {
        let doc = doc_of(&["int x; /*", "y"]);
        assert!(doc.syntax().is_none());
        for row in doc.rows() {
            assert!(row.highlight().iter().all(|h| *h == HighlightClass::Normal));
            assert!(!row.has_open_comment());
        }
    }

    #[test]
    fn set_filename_selects_profile_and_recolors() {
        let mut doc = doc_of(&["int x;"]);
        doc.set_filename(PathBuf::from("main.c"));
        assert_eq!(doc.syntax().map(|s| s.name), Some("c"));
        assert_eq!(doc.row(0).unwrap().highlight()[0], HighlightClass::KeywordSecondary);
        doc.set_filename(PathBuf::from("notes.txt"));
        assert!(doc.syntax().is_none());
        assert_eq!(doc.row(0).unwrap().highlight()[0], HighlightClass::Normal);
    }

    #[test]
    fn tab_stop_is_at_least_one() {
        assert_eq!(Document::new(0).tab_stop(), 1);
    }
}
