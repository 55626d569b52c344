//! Syntax highlighting classes, language profiles and the per-row classifier.
//!
//! The classifier is a byte-oriented scanner over a row's *rendered* text (tabs
//! already expanded). It carries exactly one bit of state across rows: whether
//! the previous row ended inside an unterminated block comment. Callers own the
//! cascade (re-running subsequent rows while that bit keeps changing); this
//! crate only classifies a single row.
//!
//! Profiles are immutable `'static` data. A document selects at most one
//! profile from its file name and shares it read-only with every pass.

mod classify;
mod profiles;

pub use classify::{ClassifiedRow, classify_row, is_separator};
pub use profiles::{BUILTIN_PROFILES, select_profile};

/// Display category for one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightClass {
    #[default]
    Normal,
    Comment,
    MultilineComment,
    KeywordPrimary,
    KeywordSecondary,
    String,
    Number,
    SearchMatch,
}

impl HighlightClass {
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::MultilineComment)
    }
}

/// Immutable description of how to highlight one language.
#[derive(Debug)]
pub struct SyntaxProfile {
    /// Short file type label shown in the status bar.
    pub name: &'static str,
    /// Extensions (leading `.`, compared exactly) or name fragments (substring match).
    pub file_match_patterns: &'static [&'static str],
    pub keywords_primary: &'static [&'static str],
    pub keywords_secondary: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    /// `(start, end)` delimiters of a block comment.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}
