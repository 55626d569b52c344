//! Single-line modal prompt shown in the message bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a printable ASCII byte; anything else is ignored. Returns true when the input changed.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_ascii() && !c.is_ascii_control() {
            self.input.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last byte. Returns true when the input changed.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Text for the message bar.
    pub fn display(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Search => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }
}
