//! Main module for usfm library functionality

pub mod canon;
pub mod lexing;
pub mod parsing;
pub mod stylesheet;
pub mod token;
pub mod verse_ref;
