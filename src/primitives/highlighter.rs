//! Single-pass lexical classification of rendered rows
//!
//! # Design
//! - **Row-local**: a row is classified from its own render text plus one
//!   boolean, whether the previous row ended inside a block comment.
//! - **Pure**: [`classify`] touches no document state. Propagating a changed
//!   trailing state to the following rows is the caller's job (see
//!   `Document`), which makes each row testable in isolation.

use super::syntax::{SyntaxDefinition, SECONDARY_KEYWORD_MARKER};

/// Lexical category assigned to each rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightClass {
    #[default]
    Normal,
    String,
    Number,
    Comment,
    MultiLineComment,
    /// Primary keywords (control flow, declarations)
    Keyword1,
    /// Secondary keywords (type names)
    Keyword2,
    /// Transient search match marker
    Match,
}

/// Result of classifying one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// One class per render byte
    pub highlight: Vec<HighlightClass>,
    /// True when the row ends inside an unterminated block comment
    pub open_comment: bool,
}

/// Whether `byte` delimits keywords and numbers
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r' | b'\0')
        || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Classify a rendered row.
///
/// `in_comment` is the trailing state of the previous row. Without a syntax
/// definition every cell is [`HighlightClass::Normal`] and the row never
/// leaves a comment open.
pub fn classify(
    render: &[u8],
    in_comment: bool,
    syntax: Option<&SyntaxDefinition>,
) -> Classification {
    let mut highlight = vec![HighlightClass::Normal; render.len()];
    let Some(syntax) = syntax else {
        return Classification {
            highlight,
            open_comment: false,
        };
    };

    let line_comment = syntax.single_line_comment.filter(|m| !m.is_empty());
    let block_comment = syntax
        .multi_line_comment
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = in_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let rest = &render[i..];
        let prev_hl = if i > 0 {
            highlight[i - 1]
        } else {
            HighlightClass::Normal
        };

        if let Some(marker) = line_comment {
            if in_string.is_none() && !in_comment && rest.starts_with(marker.as_bytes()) {
                highlight[i..].fill(HighlightClass::Comment);
                break;
            }
        }

        if let Some((start, end)) = block_comment {
            if in_string.is_none() {
                if in_comment {
                    highlight[i] = HighlightClass::MultiLineComment;
                    if rest.starts_with(end.as_bytes()) {
                        highlight[i..i + end.len()].fill(HighlightClass::MultiLineComment);
                        i += end.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        i += 1;
                    }
                    continue;
                } else if rest.starts_with(start.as_bytes()) {
                    highlight[i..i + start.len()].fill(HighlightClass::MultiLineComment);
                    i += start.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if syntax.highlight_strings {
            if let Some(quote) = in_string {
                highlight[i] = HighlightClass::String;
                if c == b'\\' && i + 1 < render.len() {
                    highlight[i + 1] = HighlightClass::String;
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
                highlight[i] = HighlightClass::String;
                i += 1;
                continue;
            }
        }

        if syntax.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == HighlightClass::Number))
                || (c == b'.' && prev_hl == HighlightClass::Number))
        {
            highlight[i] = HighlightClass::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = match_keyword(rest, syntax.keywords) {
                highlight[i..i + len].fill(class);
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    Classification {
        highlight,
        open_comment: in_comment,
    }
}

/// Find the first keyword that prefixes `rest` and is followed by a separator
/// or the end of the row. Returns the matched length and its class.
fn match_keyword(rest: &[u8], keywords: &[&str]) -> Option<(usize, HighlightClass)> {
    keywords.iter().find_map(|keyword| {
        let (word, class) = match keyword.strip_suffix(SECONDARY_KEYWORD_MARKER) {
            Some(word) => (word, HighlightClass::Keyword2),
            None => (*keyword, HighlightClass::Keyword1),
        };
        let word = word.as_bytes();
        let boundary = rest.get(word.len()).map_or(true, |&next| is_separator(next));
        (!word.is_empty() && rest.starts_with(word) && boundary).then_some((word.len(), class))
    })
}
