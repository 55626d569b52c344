//! Editor state: the document plus every piece of session state that is not
//! per-view (cursor and scroll live in `core-model::View`).
//!
//! Everything here used to be process-wide in small editors of this kind; it
//! is collected into one explicitly constructed `EditorState` that the
//! dispatcher receives by `&mut`:
//! - transient status message with an expiry instant,
//! - `QuitGuard` for the unsaved-changes quit confirmation,
//! - the modal `Prompt` (save-as / search),
//! - the `SearchState` machine,
//! - the `HighlightOverlay` consulted by the compositor for search matches.

use core_text::Document;
use std::time::{Duration, Instant};

pub mod overlay;
pub mod prompt;
pub mod quit;
pub mod search;

pub use overlay::HighlightOverlay;
pub use prompt::{Prompt, PromptKind};
pub use quit::{QuitDecision, QuitGuard};
pub use search::{MatchSpan, SavedView, SearchDirection, SearchSession, SearchState, find_match};

pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);
/// Longest lifetime a transient message can have.
pub const MAX_MESSAGE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_QUIT_TIMES: u32 = 3;
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Transient status message container.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Top-level editor state container.
pub struct EditorState {
    pub document: Document,
    pub ephemeral_status: Option<EphemeralMessage>,
    pub message_ttl: Duration,
    pub quit_guard: QuitGuard,
    pub prompt: Option<Prompt>,
    pub search: SearchState,
    pub overlay: HighlightOverlay,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ephemeral_status: None,
            message_ttl: DEFAULT_MESSAGE_TTL,
            quit_guard: QuitGuard::new(DEFAULT_QUIT_TIMES),
            prompt: None,
            search: SearchState::Idle,
            overlay: HighlightOverlay::default(),
        }
    }

    pub fn with_quit_times(mut self, quit_times: u32) -> Self {
        self.quit_guard = QuitGuard::new(quit_times);
        self
    }

    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    /// Set an ephemeral status message with an explicit timeout (capped at `MAX_MESSAGE_TTL`).
    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        let text = msg.into();
        let now = Instant::now();
        let expires_at = now.checked_add(ttl.min(MAX_MESSAGE_TTL)).unwrap_or(now);
        tracing::trace!(target: "state.message", len = text.len(), "set_ephemeral");
        self.ephemeral_status = Some(EphemeralMessage { text, expires_at });
    }

    /// Set an ephemeral status message using the configured timeout.
    pub fn set_message<S: Into<String>>(&mut self, msg: S) {
        self.set_ephemeral(msg, self.message_ttl);
    }

    /// Message text if it has not expired at `now`.
    pub fn message_at(&self, now: Instant) -> Option<&str> {
        self.ephemeral_status
            .as_ref()
            .filter(|m| now < m.expires_at)
            .map(|m| m.text.as_str())
    }

    /// Tick ephemeral status; returns true if message expired and was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        if let Some(m) = &self.ephemeral_status
            && Instant::now() >= m.expires_at
        {
            self.ephemeral_status = None;
            return true;
        }
        false
    }
}
