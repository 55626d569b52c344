#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::Document;
use std::time::Instant;

pub fn model_from(doc: Document) -> EditorModel {
    EditorModel::new(EditorState::new(doc), View::for_terminal(80, 24))
}

pub fn model(lines: &[&str]) -> EditorModel {
    let mut text = lines.join("\n");
    if !lines.is_empty() {
        text.push('\n');
    }
    model_from(Document::from_reader(text.as_bytes(), 8).unwrap())
}

pub fn press(m: &mut EditorModel, code: KeyCode) -> DispatchResult {
    let r = handle_key(m, &KeyEvent::plain(code));
    m.refresh_view();
    r
}

pub fn ctrl(m: &mut EditorModel, c: char) -> DispatchResult {
    let r = handle_key(m, &KeyEvent::ctrl(c));
    m.refresh_view();
    r
}

pub fn type_str(m: &mut EditorModel, s: &str) {
    for c in s.chars() {
        press(m, KeyCode::Char(c));
    }
}

pub fn rows(m: &EditorModel) -> Vec<String> {
    m.document()
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
        .collect()
}

/// (cx, cy)
pub fn cursor(m: &EditorModel) -> (usize, usize) {
    (m.view().cursor.cx, m.view().cursor.cy)
}

pub fn message(m: &EditorModel) -> Option<String> {
    m.state().message_at(Instant::now()).map(str::to_owned)
}
