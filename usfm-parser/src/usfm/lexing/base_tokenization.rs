//! Base tokenization for a single USFM line
//!
//! A marker is a backslash followed by a run of non-whitespace, non-backslash characters, which
//! must itself be followed by whitespace or the end of the line. A bare `\*` is also a marker
//! (the generic end marker). Anything else, including a backslash that does not start a valid
//! marker, is literal text.
//!
//! The data of a book, chapter or verse marker starts right after the marker's trailing
//! whitespace and stops at whitespace or a backslash, so `\id GEN\c 1` is two markers.

use crate::usfm::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([^\s\\]+)(\s+|$)|\\(\*)").unwrap());

static DATA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s\\]+").unwrap());

/// Classify a marker name (without backslash) into a token kind.
///
/// Precedence: `*` is End; `id`, `c`, `v` are Book, Chapter, Verse; names starting with `q`,
/// `p` or `m` are Paragraph; other names ending in `*` are End; everything else is Character.
pub fn classify_marker(marker: &str) -> TokenKind {
    match marker {
        "*" => TokenKind::End,
        "id" => TokenKind::Book,
        "c" => TokenKind::Chapter,
        "v" => TokenKind::Verse,
        m if m.starts_with(['q', 'p', 'm']) => TokenKind::Paragraph,
        m if m.ends_with('*') => TokenKind::End,
        _ => TokenKind::Character,
    }
}

fn takes_data(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Book | TokenKind::Chapter | TokenKind::Verse)
}

/// Character column of a byte offset within a line
fn char_column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

/// Tokenize one line (without its line terminator) and append the tokens, closing with the
/// synthetic newline token.
pub fn tokenize_line(line: &str, line_number: usize, tokens: &mut Vec<Token>) {
    let mut pos = 0;

    while pos < line.len() {
        let Some(captures) = MARKER_REGEX.captures_at(line, pos) else {
            tokens.push(Token::text(
                &line[pos..],
                line_number,
                char_column(line, pos),
            ));
            break;
        };
        let Some(whole) = captures.get(0) else {
            break;
        };

        if whole.start() > pos {
            tokens.push(Token::text(
                &line[pos..whole.start()],
                line_number,
                char_column(line, pos),
            ));
        }

        let (marker, kind) = match captures.get(1) {
            Some(name) => (name.as_str(), classify_marker(name.as_str())),
            None => ("*", TokenKind::End),
        };

        let mut end = whole.end();
        let data = if takes_data(kind) {
            DATA_REGEX.find(&line[end..]).map(|found| {
                end += found.end();
                found.as_str().to_string()
            })
        } else {
            None
        };

        tokens.push(Token::marker(
            kind,
            marker,
            data,
            line_number,
            char_column(line, whole.start()),
        ));
        pos = end;
    }

    tokens.push(Token::text("\n", line_number, line.chars().count()));
}
