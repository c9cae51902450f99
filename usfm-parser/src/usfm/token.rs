//! Token types produced by the tokenizer and consumed by the parser.
//!
//!     USFM is line oriented but not line structured: a marker opens a scope that lasts until
//!     another marker (or an explicit end marker) closes it, and several markers may share a
//!     line. The tokenizer therefore produces a flat sequence of tokens, each one either a
//!     marker (with its name and, for book/chapter/verse, the identifier that follows it) or a
//!     run of literal text.
//!
//! Synthetic Tokens
//!
//!     Every source line ends with a synthetic Text token holding a single "\n", even when the
//!     line is empty. Line breaks inside a verse are part of its text until normalization, so
//!     they must survive tokenization.

use serde::Serialize;
use std::fmt;

/// The classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `\id`, followed by the book code
    Book,

    /// `\c`, followed by the chapter label
    Chapter,

    /// `\v`, followed by the verse label
    Verse,

    /// Literal text between markers
    Text,

    /// Paragraph-level markers (`\p`, `\q1`, `\m`, ...)
    Paragraph,

    /// Character-level markers (`\w`, `\nd`, `\f`, ...)
    Character,

    Note,

    /// End markers (`\w*`, `\*`)
    End,

    Milestone,
    MilestoneEnd,

    /// Reserved for markers the tokenizer cannot classify. The current rule set always falls
    /// back to Character, so this is never emitted.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Book => "book",
            TokenKind::Chapter => "chapter",
            TokenKind::Verse => "verse",
            TokenKind::Text => "text",
            TokenKind::Paragraph => "paragraph",
            TokenKind::Character => "character",
            TokenKind::Note => "note",
            TokenKind::End => "end",
            TokenKind::Milestone => "milestone",
            TokenKind::MilestoneEnd => "milestone-end",
            TokenKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A single token with its source position.
///
/// `line` is 1-based, `column` is a 0-based character offset into the line. For markers the
/// position is the backslash; for text it is the first character of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,

    /// Marker name without the leading backslash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Identifier following a book, chapter or verse marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Create a text token
    pub fn text(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Text,
            marker: None,
            data: None,
            text: Some(text.into()),
            line,
            column,
        }
    }

    /// Create a marker token
    pub fn marker(
        kind: TokenKind,
        marker: impl Into<String>,
        data: Option<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            marker: Some(marker.into()),
            data,
            text: None,
            line,
            column,
        }
    }

    /// The marker with a leading `+` removed. Nested character markers (`\+w`) share their
    /// tag with the unnested form.
    pub fn nestless_marker(&self) -> Option<&str> {
        self.marker
            .as_deref()
            .map(|marker| marker.strip_prefix('+').unwrap_or(marker))
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.marker, &self.data) {
            (TokenKind::Text, _, _) => {
                write!(f, "<text:{:?}>", self.text.as_deref().unwrap_or_default())
            }
            (kind, Some(marker), Some(data)) => write!(f, "<{}:\\{} {}>", kind, marker, data),
            (kind, Some(marker), None) => write!(f, "<{}:\\{}>", kind, marker),
            (kind, None, _) => write!(f, "<{}>", kind),
        }
    }
}
