//! Status bar composition.
//!
//! Left: `<name> - <N> lines[ (modified)]` with the name cut to 20 characters
//! (`[No Name]` for an unsaved buffer). Right: `<file type> | <line>/<N>`.
//! The right part sits flush against the right edge when both fit; otherwise
//! the left part is truncated to the width and the right part is dropped.

use std::path::Path;

pub const MAX_NAME_CHARS: usize = 20;
pub const NO_NAME: &str = "[No Name]";
pub const NO_FILETYPE: &str = "no ft";

/// What the status bar needs from the editor.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub line_count: usize,
    pub dirty: bool,
    pub filetype: Option<&'a str>,
    /// 0-based cursor row.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSegments {
    pub left: String,
    pub right: String,
}

pub fn compose_status(ctx: &StatusContext<'_>) -> StatusSegments {
    let name: String = match ctx.file_name {
        Some(path) => path.display().to_string().chars().take(MAX_NAME_CHARS).collect(),
        None => NO_NAME.to_string(),
    };
    let modified = if ctx.dirty { " (modified)" } else { "" };
    StatusSegments {
        left: format!("{name} - {} lines{modified}", ctx.line_count),
        right: format!(
            "{} | {}/{}",
            ctx.filetype.unwrap_or(NO_FILETYPE),
            ctx.line + 1,
            ctx.line_count
        ),
    }
}

/// Status text laid out to exactly `width` columns (shorter only if the left part alone is).
pub fn format_status(ctx: &StatusContext<'_>, width: usize) -> String {
    let StatusSegments { left, right } = compose_status(ctx);
    let mut line: String = left.chars().take(width).collect();
    let mut len = line.chars().count();
    while len < width {
        if width - len == right.len() {
            line.push_str(&right);
            break;
        }
        line.push(' ');
        len += 1;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx<'a>(name: Option<&'a Path>, dirty: bool) -> StatusContext<'a> {
        StatusContext {
            file_name: name,
            line_count: 3,
            dirty,
            filetype: None,
            line: 0,
        }
    }

    #[test]
    fn unnamed_buffer() {
        let seg = compose_status(&ctx(None, false));
        assert_eq!(seg.left, "[No Name] - 3 lines");
        assert_eq!(seg.right, "no ft | 1/3");
    }

    #[test]
    fn long_names_are_cut_and_dirty_is_flagged() {
        let path = Path::new("a_really_long_file_name_here.c");
        let mut c = ctx(Some(path), true);
        c.filetype = Some("c");
        c.line = 2;
        let seg = compose_status(&c);
        assert_eq!(seg.left, "a_really_long_file_n - 3 lines (modified)");
        assert_eq!(seg.right, "c | 3/3");
    }

    #[test]
    fn right_part_is_flush_with_the_edge() {
        let line = format_status(&ctx(None, false), 40);
        assert_eq!(line.len(), 40);
        assert!(line.starts_with("[No Name] - 3 lines "));
        assert!(line.ends_with("no ft | 1/3"));
    }

    #[test]
    fn narrow_width_drops_right_part() {
        assert_eq!(format_status(&ctx(None, false), 9), "[No Name]");
        let line = format_status(&ctx(None, false), 25);
        assert_eq!(line, format!("{:<25}", "[No Name] - 3 lines"));
    }
}
