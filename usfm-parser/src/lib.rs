//! # usfm-parser
//!
//! Verse extraction for USFM, the backslash-marker markup used to annotate scripture
//! documents (book, chapter and verse identifiers, paragraph and character styles, notes,
//! sidebars).
//!
//! File Layout
//!
//!     src/usfm
//!       ├── token        Typed tokens with source positions
//!       ├── lexing       Raw text to token stream
//!       ├── stylesheet   Marker registry: marker to semantic tag
//!       ├── parsing      Parser state (element stack) and the verse segmentation driver
//!       ├── canon        Book id table
//!       └── verse_ref    Verse identity
//!
//! The contract for the whole crate is [parse_usfm]: any string in, a map from
//! `"BOOK CHAPTER:VERSE"` to whitespace-normalized verse text out. It never fails.

pub mod usfm;

pub use usfm::parsing::{parse_usfm, UsfmParser, VerseMap};
