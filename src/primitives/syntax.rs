//! Statically registered syntax definitions
//!
//! Each definition is an immutable record describing how the highlighter
//! should lex one file type. A definition is chosen once per session from the
//! file name and never changes afterwards.

use std::path::Path;

/// Suffix marking a keyword as belonging to the secondary class (type names)
pub const SECONDARY_KEYWORD_MARKER: char = '|';

/// Lexical rules for one file type
#[derive(Debug, PartialEq, Eq)]
pub struct SyntaxDefinition {
    /// Short tag shown in the status line (e.g. "c")
    pub file_type: &'static str,
    /// Patterns matched against the file name. Entries starting with `.` must
    /// equal the extension, anything else matches as a substring.
    pub file_match: &'static [&'static str],
    /// Keywords in match order. Entries ending in [`SECONDARY_KEYWORD_MARKER`]
    /// are secondary keywords.
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    /// Block comment start and end markers
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

impl SyntaxDefinition {
    /// Whether any of this definition's patterns matches `filename`
    pub fn matches(&self, filename: &str) -> bool {
        let extension = filename.rfind('.').map(|dot| &filename[dot..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|", "char|",
    "unsigned|", "signed|", "void|",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
    "or", "pass", "raise", "return", "try", "while", "with", "yield", "None|", "True|", "False|",
    "int|", "float|", "str|", "bytes|", "list|", "dict|", "set|", "tuple|", "bool|",
];

/// Every definition known to the editor, in match priority order
pub static SYNTAX_DEFINITIONS: &[SyntaxDefinition] = &[
    SyntaxDefinition {
        file_type: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        multi_line_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    SyntaxDefinition {
        file_type: "python",
        file_match: &[".py"],
        keywords: PYTHON_KEYWORDS,
        single_line_comment: Some("#"),
        multi_line_comment: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Pick the first registered definition whose patterns match `filename`
pub fn select_for_filename(filename: &str) -> Option<&'static SyntaxDefinition> {
    SYNTAX_DEFINITIONS.iter().find(|syntax| syntax.matches(filename))
}

/// Pick a definition for a path, matching against its full display form
pub fn select_for_path(path: &Path) -> Option<&'static SyntaxDefinition> {
    select_for_filename(&path.to_string_lossy())
}
