use crate::SyntaxProfile;
use std::path::Path;

const C_PRIMARY: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "default", "goto", "sizeof", "do",
];
const C_SECONDARY: &[&str] = &[
    "int", "long", "double", "float", "char", "unsigned", "signed", "void", "const", "short",
    "auto", "volatile", "register", "extern",
];

const RUST_PRIMARY: &[&str] = &[
    "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in", "return", "break",
    "continue", "struct", "enum", "impl", "trait", "pub", "use", "mod", "crate", "self", "Self",
    "super", "where", "as", "const", "static", "type", "unsafe", "move", "ref", "dyn", "async",
    "await",
];
const RUST_SECONDARY: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
    "f32", "f64", "bool", "char", "str", "String", "Vec", "Option", "Result", "Box", "true",
    "false",
];

const PY_PRIMARY: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "return", "import", "from", "as",
    "with", "try", "except", "finally", "raise", "pass", "break", "continue", "lambda", "yield",
    "global", "nonlocal", "in", "is", "not", "and", "or",
];
const PY_SECONDARY: &[&str] = &[
    "None", "True", "False", "self", "int", "str", "float", "list", "dict", "tuple", "set",
];

/// Built-in language table, searched in order.
pub static BUILTIN_PROFILES: &[SyntaxProfile] = &[
    SyntaxProfile {
        name: "c",
        file_match_patterns: &[".c", ".h", ".cpp", ".hpp", ".cc"],
        keywords_primary: C_PRIMARY,
        keywords_secondary: C_SECONDARY,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    SyntaxProfile {
        name: "rust",
        file_match_patterns: &[".rs"],
        keywords_primary: RUST_PRIMARY,
        keywords_secondary: RUST_SECONDARY,
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    SyntaxProfile {
        name: "python",
        file_match_patterns: &[".py"],
        keywords_primary: PY_PRIMARY,
        keywords_secondary: PY_SECONDARY,
        line_comment: Some("#"),
        block_comment: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Pick the first profile in `profiles` whose pattern list matches `path`.
///
/// Patterns starting with `.` must equal the file's extension (dot included);
/// anything else matches as a substring of the file name.
pub fn select_profile(
    profiles: &'static [SyntaxProfile],
    path: &Path,
) -> Option<&'static SyntaxProfile> {
    let file_name = path.file_name()?.to_string_lossy();
    let ext = file_name.rfind('.').map(|dot| &file_name[dot..]);
    let found = profiles.iter().find(|profile| {
        profile.file_match_patterns.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    });
    tracing::debug!(
        target: "syntax",
        file = %file_name,
        profile = found.map(|p| p.name),
        "select_profile"
    );
    found
}
