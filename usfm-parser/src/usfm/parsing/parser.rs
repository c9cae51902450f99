//! Verse segmentation
//!
//!     A single forward pass over the token stream. Book, chapter and verse tokens move the
//!     current verse identity; text tokens that the parser state accepts as verse text are
//!     appended to the current verse. A verse is written to the output when the next verse
//!     starts or the stream ends, and only if it has text left after trimming.
//!
//!     Paragraph, character, note and end markers are not acted on here: the element stack is
//!     never pushed, so every text position counts as verse text. The state's push/pop
//!     operations are the place to wire nesting in.
//!
//! Verse Number Echo
//!
//!     Sources often repeat the verse number right after the marker (`\v 12 12 He said`), or
//!     punctuate it (`\v 3 3. And`). When a text token directly follows a verse token and
//!     starts with the verse label, the label and any following whitespace or `.,;:` are
//!     dropped.

use crate::usfm::lexing::tokenize;
use crate::usfm::parsing::state::ParserState;
use crate::usfm::stylesheet::Stylesheet;
use crate::usfm::token::{Token, TokenKind};
use crate::usfm::verse_ref::VerseRef;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Verse identity (`"GEN 1:1"`) to verse text, in order of first appearance
pub type VerseMap = IndexMap<String, String>;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reusable parser. The stylesheet persists across documents, so tags seen in one document
/// are already cached for the next.
#[derive(Debug, Default)]
pub struct UsfmParser {
    stylesheet: Stylesheet,
}

impl UsfmParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stylesheet(stylesheet: Stylesheet) -> Self {
        Self { stylesheet }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Extract verse text from a USFM document
    pub fn parse(&self, source: &str) -> VerseMap {
        let tokens = tokenize(source);
        self.parse_tokens(&tokens)
    }

    /// Extract verse text from an already tokenized document
    pub fn parse_tokens(&self, tokens: &[Token]) -> VerseMap {
        let mut state = ParserState::new(&self.stylesheet, VerseRef::default(), tokens);
        let mut segmenter = VerseSegmenter::default();

        while let Some(token) = state.advance() {
            match token.kind {
                TokenKind::Book => {
                    if let Some(book) = data_of(token) {
                        segmenter.set_book(book);
                    }
                }
                TokenKind::Chapter => {
                    if let Some(chapter) = data_of(token) {
                        segmenter.start_chapter(chapter);
                    }
                }
                TokenKind::Verse => {
                    if let Some(verse) = data_of(token) {
                        segmenter.start_verse(verse);
                        state.verse_ref = segmenter.current.clone();
                    }
                }
                TokenKind::Text if state.is_verse_text() => {
                    let follows_verse = state
                        .prev_token()
                        .is_some_and(|prev| prev.is_kind(TokenKind::Verse));
                    if let Some(text) = token.text.as_deref() {
                        segmenter.push_text(text, follows_verse);
                    }
                }
                _ => {}
            }
        }

        let verses = segmenter.finish();
        log::debug!(
            "segmented {} tokens into {} verses",
            tokens.len(),
            verses.len()
        );
        verses
    }
}

/// Extract verse text with a fresh default stylesheet
pub fn parse_usfm(source: &str) -> VerseMap {
    UsfmParser::new().parse(source)
}

fn data_of(token: &Token) -> Option<&str> {
    token.data.as_deref().filter(|data| !data.is_empty())
}

/// Accumulates verse text while the driver walks the tokens
#[derive(Debug, Default)]
struct VerseSegmenter {
    current: VerseRef,
    buffer: String,
    verses: VerseMap,
}

impl VerseSegmenter {
    fn set_book(&mut self, book: &str) {
        self.current.book = book.to_string();
    }

    /// A new chapter drops whatever was pending: text between `\c` and the first `\v`
    /// belongs to no verse.
    fn start_chapter(&mut self, chapter: &str) {
        log::trace!("chapter {} {}", self.current.book, chapter);
        self.current.chapter = chapter.to_string();
        self.current.verse.clear();
        self.buffer.clear();
    }

    fn start_verse(&mut self, verse: &str) {
        self.flush();
        self.current.verse = verse.to_string();
        self.buffer.clear();
    }

    fn push_text(&mut self, text: &str, follows_verse: bool) {
        if !self.current.is_complete() {
            return;
        }

        if follows_verse {
            let trimmed = text.trim();
            if let Some(rest) = trimmed.strip_prefix(self.current.verse.as_str()) {
                let body = rest.trim_start_matches(|c: char| {
                    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':')
                });
                self.buffer.push_str(body);
                self.buffer.push(' ');
                return;
            }
        }

        self.buffer.push_str(text);
    }

    /// Write the pending verse, if any, to the output
    fn flush(&mut self) {
        if !self.current.is_complete() {
            return;
        }

        let text = self.buffer.trim();
        if !text.is_empty() {
            log::trace!("verse {}", self.current);
            self.verses.insert(self.current.to_string(), text.to_string());
        }
    }

    fn finish(mut self) -> VerseMap {
        self.flush();
        for text in self.verses.values_mut() {
            let collapsed = WHITESPACE_REGEX.replace_all(text, " ").trim().to_string();
            *text = collapsed;
        }
        self.verses
    }
}
