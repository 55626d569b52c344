//! Key -> `Action` translation.
//!
//! Two tables: one while a prompt is open (line editing plus search
//! navigation), one for the editing bindings. Only printable ASCII inserts
//! text; other characters are unbound.

use crate::{Action, EditKind, MotionKind, PromptInput};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(prompt_open: bool, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", prompt_open, key = %key, "translate_key_attempt");
    if prompt_open {
        prompt_map(key).map(Action::Prompt)
    } else {
        editing_map(key)
    }
}

fn printable(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
                && c.is_ascii()
                && !c.is_ascii_control() =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn prompt_map(key: &KeyEvent) -> Option<PromptInput> {
    if key.is_ctrl('h') {
        return Some(PromptInput::Backspace);
    }
    match key.code {
        KeyCode::Esc => Some(PromptInput::Cancel),
        KeyCode::Enter => Some(PromptInput::Accept),
        KeyCode::Backspace | KeyCode::Delete => Some(PromptInput::Backspace),
        KeyCode::Right | KeyCode::Down => Some(PromptInput::Next),
        KeyCode::Left | KeyCode::Up => Some(PromptInput::Previous),
        _ => printable(key).map(PromptInput::Char),
    }
}

fn editing_map(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL)
        && let KeyCode::Char(c) = key.code
    {
        return match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            's' => Some(Action::Save),
            'f' => Some(Action::Find),
            'l' => Some(Action::Redraw),
            'h' => Some(Action::Edit(EditKind::Backspace)),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(Action::Edit(EditKind::InsertNewline)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Delete => Some(Action::Edit(EditKind::DeleteUnder)),
        KeyCode::Tab => Some(Action::Edit(EditKind::InsertByte(b'\t'))),
        KeyCode::Esc => Some(Action::Redraw),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Home => Some(Action::Motion(MotionKind::LineStart)),
        KeyCode::End => Some(Action::Motion(MotionKind::LineEnd)),
        KeyCode::PageUp => Some(Action::Motion(MotionKind::PageUp)),
        KeyCode::PageDown => Some(Action::Motion(MotionKind::PageDown)),
        KeyCode::Char(_) => printable(key).map(|c| Action::Edit(EditKind::InsertByte(c as u8))),
    }
}
