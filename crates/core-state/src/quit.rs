//! Unsaved-changes quit confirmation.

/// Outcome of one quit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitDecision {
    Quit,
    /// Refused; `remaining` more presses are needed.
    Warn { remaining: u32 },
}

/// Counts down repeated quit requests while the document is dirty.
///
/// A dirty document needs `required + 1` consecutive requests; any other key
/// must call `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitGuard {
    required: u32,
    remaining: u32,
}

impl QuitGuard {
    pub fn new(required: u32) -> Self {
        Self {
            required,
            remaining: required,
        }
    }

    pub fn confirm(&mut self, dirty: bool) -> QuitDecision {
        if dirty && self.remaining > 0 {
            let remaining = self.remaining;
            self.remaining -= 1;
            tracing::debug!(target: "state.quit", remaining, "quit_refused_dirty");
            return QuitDecision::Warn { remaining };
        }
        QuitDecision::Quit
    }

    pub fn reset(&mut self) {
        self.remaining = self.required;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl QuitDecision {
    /// Status line text for a refused quit.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Quit => None,
            Self::Warn { remaining } => Some(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
            )),
        }
    }
}
