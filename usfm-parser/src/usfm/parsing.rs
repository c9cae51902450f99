//! Parsing
//!
//!     Parsing turns the token stream into verse text. It is split in two:
//!
//!         - [state]: the parser state, an element stack plus a token cursor, which decides
//!           whether a position is verse body text (as opposed to titles, notes, sidebars).
//!         - [parser]: the segmentation driver, which walks the tokens once and collects
//!           the text of each verse.

pub mod parser;
pub mod state;

pub use parser::{parse_usfm, UsfmParser, VerseMap};
pub use state::{Attribute, ElementType, ParserElement, ParserState};
