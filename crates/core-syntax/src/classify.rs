use crate::{HighlightClass, SyntaxProfile};

/// Output of classifying one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    /// One class per rendered byte.
    pub highlight: Vec<HighlightClass>,
    /// True when the row ends inside an unterminated block comment.
    pub ends_in_comment: bool,
}

/// Token boundary test used for keyword and number recognition.
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c' | 0)
        || b",.()+-/*=~%<>[];".contains(&c)
}

/// Classify `render` under `profile`.
///
/// `starts_in_comment` is the previous row's trailing block-comment state.
pub fn classify_row(
    render: &[u8],
    profile: &SyntaxProfile,
    starts_in_comment: bool,
) -> ClassifiedRow {
    use HighlightClass as H;

    let len = render.len();
    let mut hl = vec![H::Normal; len];
    let line_comment = profile
        .line_comment
        .map(str::as_bytes)
        .filter(|prefix| !prefix.is_empty());
    let block = profile
        .block_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment && block.is_some();

    let mut i = 0;
    while i < len {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { H::Normal };
        let rest = &render[i..];

        if let Some(prefix) = line_comment
            && in_string.is_none()
            && !in_comment
            && rest.starts_with(prefix)
        {
            hl[i..].fill(H::Comment);
            break;
        }

        if let Some((start, end)) = block
            && in_string.is_none()
        {
            if in_comment {
                if rest.starts_with(end) {
                    hl[i..i + end.len()].fill(H::MultilineComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = H::MultilineComment;
                    i += 1;
                }
                continue;
            } else if rest.starts_with(start) {
                hl[i..i + start.len()].fill(H::MultilineComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if profile.highlight_strings {
            if let Some(quote) = in_string {
                hl[i] = H::String;
                if c == b'\\' && i + 1 < len {
                    hl[i + 1] = H::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = H::String;
                i += 1;
                continue;
            }
        }

        if profile.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == H::Number))
                || (c == b'.' && prev_hl == H::Number))
        {
            hl[i] = H::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((kw_len, class)) = match_keyword(rest, profile) {
            hl[i..i + kw_len].fill(class);
            i += kw_len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    ClassifiedRow {
        highlight: hl,
        ends_in_comment: in_comment,
    }
}

/// Longest keyword at the start of `rest` that is followed by a separator or the row end.
fn match_keyword(rest: &[u8], profile: &SyntaxProfile) -> Option<(usize, HighlightClass)> {
    let primary = profile
        .keywords_primary
        .iter()
        .map(|kw| (kw.as_bytes(), HighlightClass::KeywordPrimary));
    let secondary = profile
        .keywords_secondary
        .iter()
        .map(|kw| (kw.as_bytes(), HighlightClass::KeywordSecondary));
    primary
        .chain(secondary)
        .filter(|(kw, _)| {
            !kw.is_empty()
                && rest.starts_with(kw)
                && rest.get(kw.len()).is_none_or(|&next| is_separator(next))
        })
        .max_by_key(|(kw, _)| kw.len())
        .map(|(kw, class)| (kw.len(), class))
}
