//! Parser state
//!
//!     The state tracks where the parser is: a cursor into the token sequence, the verse
//!     currently being read, and a stack of open elements (paragraphs, character spans, notes,
//!     sidebars, table parts), innermost last.
//!
//!     USFM rarely closes what it opens. A new paragraph implicitly ends the previous one,
//!     and a note may be terminated by the generic `\*`. Whoever drives the state is responsible
//!     for pushing and popping frames; the state only answers questions about the current
//!     nesting:
//!
//!         - [ParserState::para_tag]: the innermost paragraph-like frame's tag
//!         - [ParserState::char_tags]: character frames, innermost first
//!         - [ParserState::is_verse_text]: whether text at this point belongs to a verse body
//!
//!     An empty stack is the "just \c and \v" document: it counts as verse text.

use crate::usfm::stylesheet::{Stylesheet, Tag};
use crate::usfm::token::Token;
use crate::usfm::verse_ref::VerseRef;
use serde::Serialize;
use std::rc::Rc;

/// The kind of an open element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementType {
    Book,
    Para,
    Char,
    Table,
    Row,
    Cell,
    Note,
    Sidebar,
}

impl ElementType {
    /// Frames that define the enclosing paragraph style
    fn is_paragraph_like(self) -> bool {
        matches!(
            self,
            ElementType::Para | ElementType::Book | ElementType::Row | ElementType::Sidebar
        )
    }
}

/// An attribute attached to an element (`|lemma="grace"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub offset: usize,
}

/// One frame on the element stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserElement {
    pub element_type: ElementType,
    pub marker: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl ParserElement {
    pub fn new(element_type: ElementType, marker: Option<&str>) -> Self {
        Self {
            element_type,
            marker: marker.map(str::to_string),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

#[derive(Debug)]
pub struct ParserState<'a> {
    stylesheet: &'a Stylesheet,
    tokens: &'a [Token],
    stack: Vec<ParserElement>,
    index: Option<usize>,
    pub verse_ref: VerseRef,
}

impl<'a> ParserState<'a> {
    /// A state positioned before the first token
    pub fn new(stylesheet: &'a Stylesheet, verse_ref: VerseRef, tokens: &'a [Token]) -> Self {
        Self {
            stylesheet,
            tokens,
            stack: Vec::new(),
            index: None,
            verse_ref,
        }
    }

    pub fn stylesheet(&self) -> &'a Stylesheet {
        self.stylesheet
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn stack(&self) -> &[ParserElement] {
        &self.stack
    }

    /// Cursor position, None before the first token
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move the cursor forward and return the new current token. Returns None (and leaves
    /// the cursor past the end) once the tokens are exhausted.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let next = self.index.map_or(0, |index| index + 1);
        self.index = Some(next.min(self.tokens.len()));
        self.tokens.get(next)
    }

    pub fn token(&self) -> Option<&'a Token> {
        self.index.and_then(|index| self.tokens.get(index))
    }

    pub fn prev_token(&self) -> Option<&'a Token> {
        self.index
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.tokens.get(index))
    }

    pub fn push(&mut self, element: ParserElement) {
        self.stack.push(element);
    }

    /// Pop the innermost element.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. Every pop must match an earlier push.
    pub fn pop(&mut self) -> ParserElement {
        self.stack
            .pop()
            .expect("ParserState::pop called on an empty element stack")
    }

    fn tag_of(&self, element: &ParserElement) -> Option<Rc<Tag>> {
        element
            .marker
            .as_deref()
            .map(|marker| self.stylesheet.get_tag(marker))
    }

    /// Tag of the innermost paragraph, book, row or sidebar frame
    pub fn para_tag(&self) -> Option<Rc<Tag>> {
        self.stack
            .iter()
            .rev()
            .find(|element| element.element_type.is_paragraph_like())
            .and_then(|element| self.tag_of(element))
    }

    /// Tags of every open character span, innermost first
    pub fn char_tags(&self) -> impl Iterator<Item = Rc<Tag>> + '_ {
        self.stack
            .iter()
            .rev()
            .filter(|element| element.element_type == ElementType::Char)
            .filter_map(|element| self.tag_of(element))
    }

    pub fn char_tag(&self) -> Option<Rc<Tag>> {
        self.char_tags().next()
    }

    /// Tag of the innermost open note
    pub fn note_tag(&self) -> Option<Rc<Tag>> {
        self.stack
            .iter()
            .rev()
            .find(|element| element.element_type == ElementType::Note)
            .and_then(|element| self.tag_of(element))
    }

    pub fn is_verse_para(&self) -> bool {
        self.para_tag()
            .map_or(true, |tag| tag.text_type.is_verse_compatible())
    }

    /// Whether text at the current position belongs to a verse body
    pub fn is_verse_text(&self) -> bool {
        let in_note_or_sidebar = self.stack.iter().any(|element| {
            matches!(
                element.element_type,
                ElementType::Sidebar | ElementType::Note
            )
        });
        if in_note_or_sidebar || !self.is_verse_para() {
            return false;
        }

        self.char_tags()
            .all(|tag| tag.text_type.is_verse_compatible())
    }
}
