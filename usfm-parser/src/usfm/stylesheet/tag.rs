//! Tag: the semantic metadata a stylesheet assigns to a marker.

use bitflags::bitflags;
use serde::Serialize;
use std::collections::BTreeSet;

/// Style category of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum StyleType {
    #[default]
    Unknown,
    Character,
    Note,
    Paragraph,
    End,
    Milestone,
    MilestoneEnd,
}

bitflags! {
    /// What kind of text a marker introduces. The empty set means "not specified", which is
    /// compatible with verse text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct TextType: u8 {
        const TITLE = 1 << 0;
        const SECTION = 1 << 1;
        const VERSE_TEXT = 1 << 2;
        const NOTE_TEXT = 1 << 3;
        const OTHER = 1 << 4;
        const BACK_TRANSLATION = 1 << 5;
        const TRANSLATION_NOTE = 1 << 6;
    }
}

impl TextType {
    /// True when text under this type may be part of a verse body
    pub fn is_verse_compatible(self) -> bool {
        self.is_empty() || self.contains(TextType::VERSE_TEXT)
    }
}

bitflags! {
    /// Structural properties of a marker
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct TextProperties: u32 {
        const VERSE = 1 << 0;
        const CHAPTER = 1 << 1;
        const PARAGRAPH = 1 << 2;
        const PUBLISHABLE = 1 << 3;
        const VERNACULAR = 1 << 4;
        const POETIC = 1 << 5;
        const OTHER_TEXT_BEGIN = 1 << 6;
        const OTHER_TEXT_END = 1 << 7;
        const LEVEL1 = 1 << 8;
        const LEVEL2 = 1 << 9;
        const LEVEL3 = 1 << 10;
        const LEVEL4 = 1 << 11;
        const LEVEL5 = 1 << 12;
        const CROSS_REFERENCE = 1 << 13;
        const NONPUBLISHABLE = 1 << 14;
        const NONVERNACULAR = 1 << 15;
        const BOOK = 1 << 16;
        const NOTE = 1 << 17;
    }
}

/// An attribute a marker declares (`\w word|lemma="..."\w*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleAttribute {
    pub name: String,
    pub is_required: bool,
}

/// Metadata for one marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub marker: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub end_marker: Option<String>,
    pub style_type: StyleType,
    pub text_type: TextType,
    pub text_properties: TextProperties,
    /// Markers this one may appear under
    pub occurs_under: BTreeSet<String>,
    pub attributes: Vec<StyleAttribute>,
    pub default_attribute_name: Option<String>,
}

impl Tag {
    /// A tag with no style, no text type and no properties
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            name: None,
            description: None,
            end_marker: None,
            style_type: StyleType::Unknown,
            text_type: TextType::empty(),
            text_properties: TextProperties::empty(),
            occurs_under: BTreeSet::new(),
            attributes: Vec::new(),
            default_attribute_name: None,
        }
    }

    pub fn with_style_type(mut self, style_type: StyleType) -> Self {
        self.style_type = style_type;
        self
    }

    pub fn with_text_type(mut self, text_type: TextType) -> Self {
        self.text_type = text_type;
        self
    }

    pub fn with_text_properties(mut self, text_properties: TextProperties) -> Self {
        self.text_properties = text_properties;
        self
    }

    pub fn with_end_marker(mut self, end_marker: impl Into<String>) -> Self {
        self.end_marker = Some(end_marker.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn occurring_under<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.occurs_under.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, is_required: bool) -> Self {
        self.attributes.push(StyleAttribute {
            name: name.into(),
            is_required,
        });
        self
    }

    pub fn with_default_attribute(mut self, name: impl Into<String>) -> Self {
        self.default_attribute_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_text_type_is_verse_compatible() {
        assert!(TextType::empty().is_verse_compatible());
        assert!(TextType::VERSE_TEXT.is_verse_compatible());
        assert!((TextType::VERSE_TEXT | TextType::BACK_TRANSLATION).is_verse_compatible());
        assert!(!TextType::NOTE_TEXT.is_verse_compatible());
        assert!(!(TextType::TITLE | TextType::SECTION).is_verse_compatible());
    }

    #[test]
    fn test_builder() {
        let tag = Tag::new("w")
            .with_style_type(StyleType::Character)
            .with_text_type(TextType::VERSE_TEXT)
            .with_end_marker("w*")
            .with_attribute("lemma", false)
            .with_default_attribute("lemma")
            .occurring_under(["p", "q1"]);

        assert_eq!(tag.marker, "w");
        assert_eq!(tag.style_type, StyleType::Character);
        assert_eq!(tag.end_marker.as_deref(), Some("w*"));
        assert_eq!(tag.attributes.len(), 1);
        assert_eq!(tag.default_attribute_name.as_deref(), Some("lemma"));
        assert!(tag.occurs_under.contains("q1"));
        assert!(tag.text_properties.is_empty());
    }
}
