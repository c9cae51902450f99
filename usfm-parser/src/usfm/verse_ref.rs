//! Verse identity
//!
//! A verse is identified by the book code, chapter label and verse label exactly as they
//! appear in the source. Labels are not required to be numbers: bridged verses such as `3-4`
//! and segment labels such as `5a` are legitimate identities.

use crate::usfm::canon;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl VerseRef {
    pub fn new(
        book: impl Into<String>,
        chapter: impl Into<String>,
        verse: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }

    /// True when book, chapter and verse are all set
    pub fn is_complete(&self) -> bool {
        !self.book.is_empty() && !self.chapter.is_empty() && !self.verse.is_empty()
    }

    /// Canonical book number, 0 when the book code is unknown
    pub fn book_num(&self) -> usize {
        canon::book_id_to_number(&self.book)
    }

    pub fn chapter_num(&self) -> Option<u32> {
        numeric_label(&self.chapter)
    }

    pub fn verse_num(&self) -> Option<u32> {
        numeric_label(&self.verse)
    }
}

fn numeric_label(label: &str) -> Option<u32> {
    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
        label.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(VerseRef::new("GEN", "1", "1").to_string(), "GEN 1:1");
        assert_eq!(VerseRef::new("PSA", "119", "3-4").to_string(), "PSA 119:3-4");
    }

    #[test]
    fn test_completeness() {
        assert!(VerseRef::new("GEN", "1", "1").is_complete());
        assert!(!VerseRef::new("GEN", "1", "").is_complete());
        assert!(!VerseRef::default().is_complete());
    }

    #[test]
    fn test_numbers() {
        let verse = VerseRef::new("MAT", "5", "3-4");
        assert_eq!(verse.book_num(), 40);
        assert_eq!(verse.chapter_num(), Some(5));
        assert_eq!(verse.verse_num(), None);

        assert_eq!(VerseRef::new("ZZZ", "", "5a").book_num(), 0);
        assert_eq!(VerseRef::new("ZZZ", "", "5a").chapter_num(), None);
    }
}
