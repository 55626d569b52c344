//! Highlight class to terminal color mapping.

use core_syntax::HighlightClass;
use crossterm::style::Color;

/// Foreground color for `class`; `None` means the terminal default.
pub fn color_for(class: HighlightClass) -> Option<Color> {
    match class {
        HighlightClass::Normal => None,
        HighlightClass::Comment | HighlightClass::MultilineComment => Some(Color::DarkCyan),
        HighlightClass::KeywordPrimary => Some(Color::DarkYellow),
        HighlightClass::KeywordSecondary => Some(Color::DarkGreen),
        HighlightClass::String => Some(Color::DarkMagenta),
        HighlightClass::Number => Some(Color::DarkRed),
        HighlightClass::SearchMatch => Some(Color::DarkBlue),
    }
}

/// Printable stand-in for a control byte: `@`+byte for 0..=26, `?` otherwise.
pub fn control_symbol(byte: u8) -> u8 {
    if byte <= 26 { b'@' + byte } else { b'?' }
}
