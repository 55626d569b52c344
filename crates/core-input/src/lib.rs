//! Input sources feeding the runtime loop.
//!
//! The loop asks an `InputSource` for at most one event per iteration, waiting
//! no longer than the given timeout so expired status messages still get
//! cleared while the user is idle. `CrosstermInput` reads the real terminal;
//! `ScriptedInput` replays a fixed sequence for tests and headless runs.

mod key_map;

pub use key_map::{map_event, map_key_event, map_mods};

use anyhow::Result;
use core_events::InputEvent;
use crossterm::event;
use std::collections::VecDeque;
use std::time::Duration;

pub trait InputSource {
    /// Next normalized event, or `None` when nothing arrived within `timeout`.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Terminal-backed source. Raw mode must already be enabled.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let raw = event::read()?;
        let mapped = map_event(&raw);
        match &mapped {
            Some(InputEvent::Key(key)) => {
                tracing::trace!(target: "input", key = %key, "keypress");
            }
            Some(InputEvent::Resize(w, h)) => {
                tracing::debug!(target: "input", width = w, height = h, "resize");
            }
            None => tracing::trace!(target: "input", "event_ignored"),
        }
        Ok(mapped)
    }
}

/// Replays queued events; reports idle once drained.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}
