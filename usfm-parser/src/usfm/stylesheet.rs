//! Marker registry
//!
//!     The stylesheet maps a marker name to its [Tag]. Lookup is total: a marker that has never
//!     been seen gets a default tag (Unknown style, Publishable text) which is memoized, so
//!     every later lookup of that marker returns the very same tag.
//!
//!     Three tags exist from the start: `id` (book), `c` (chapter) and `v` (verse). The chapter
//!     and verse markers are the only markers that do not default to Publishable.
//!
//!     Tags are handed out as `Rc<Tag>` and never change once created. [Stylesheet::register]
//!     needs `&mut self`, so it can only run before a parse borrows the stylesheet.

pub mod tag;

pub use tag::{StyleAttribute, StyleType, Tag, TextProperties, TextType};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Stylesheet {
    tags: RefCell<HashMap<String, Rc<Tag>>>,
}

impl Stylesheet {
    /// A stylesheet holding only the book, chapter and verse tags
    pub fn new() -> Self {
        let stylesheet = Self {
            tags: RefCell::new(HashMap::new()),
        };
        for tag in Self::builtin_tags() {
            stylesheet
                .tags
                .borrow_mut()
                .insert(tag.marker.clone(), Rc::new(tag));
        }
        stylesheet
    }

    fn builtin_tags() -> [Tag; 3] {
        [
            Tag::new("id")
                .with_style_type(StyleType::Paragraph)
                .with_text_properties(TextProperties::BOOK),
            Tag::new("c")
                .with_style_type(StyleType::Paragraph)
                .with_text_properties(TextProperties::CHAPTER),
            Tag::new("v")
                .with_style_type(StyleType::Character)
                .with_text_properties(TextProperties::VERSE),
        ]
    }

    /// The default tag for a marker nobody has described
    fn default_tag(marker: &str) -> Tag {
        let tag = Tag::new(marker);
        if marker == "c" || marker == "v" {
            tag
        } else {
            tag.with_text_properties(TextProperties::PUBLISHABLE)
        }
    }

    /// Resolve a marker to its tag, creating and caching a default one on first sight.
    pub fn get_tag(&self, marker: &str) -> Rc<Tag> {
        if let Some(tag) = self.tags.borrow().get(marker) {
            return Rc::clone(tag);
        }

        log::trace!("stylesheet: creating default tag for \\{}", marker);
        let tag = Rc::new(Self::default_tag(marker));
        self.tags
            .borrow_mut()
            .insert(marker.to_string(), Rc::clone(&tag));
        tag
    }

    /// Install a tag, replacing any tag already registered for its marker.
    pub fn register(&mut self, tag: Tag) {
        self.tags
            .get_mut()
            .insert(tag.marker.clone(), Rc::new(tag));
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.tags.borrow().contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.tags.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.borrow().is_empty()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}
