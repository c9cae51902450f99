//! Lexer
//!
//!     This module turns USFM source text into a flat token stream. See
//!     [base_tokenization](base_tokenization) for the per-line scanner.
//!
//! The Lexing Pipeline
//!
//!     1. Line endings are normalized (CRLF becomes LF) and the source is split into lines.
//!     2. Each line is scanned left to right for markers. Text between markers becomes Text
//!        tokens; each marker becomes one token classified by its name.
//!     3. Book, chapter and verse markers also take the run that follows them as their data. The
//!        run ends at whitespace or a backslash, so a marker glued to the data still counts.
//!     4. Every line closes with a synthetic "\n" Text token.
//!
//!     There are no lexing errors. Anything that does not look like a marker is text.

pub mod base_tokenization;

pub use base_tokenization::{classify_marker, tokenize_line};

use crate::usfm::token::Token;

/// Tokenize a whole USFM document.
pub fn tokenize(source: &str) -> Vec<Token> {
    let normalized = source.replace("\r\n", "\n");
    let mut tokens = Vec::new();

    for (index, line) in normalized.split('\n').enumerate() {
        tokenize_line(line, index + 1, &mut tokens);
    }

    // The last token is always the newline closing the last line
    let line_count = tokens.last().map_or(0, |token| token.line);
    log::trace!("tokenized {} lines into {} tokens", line_count, tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usfm::token::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input_yields_one_newline() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::text("\n", 1, 0)]);
    }

    #[test]
    fn test_every_line_ends_with_newline_token() {
        let tokens = tokenize("\\c 1\n\n\\v 1 text");
        let newlines: Vec<usize> = tokens
            .iter()
            .filter(|t| t.text.as_deref() == Some("\n"))
            .map(|t| t.line)
            .collect();
        assert_eq!(newlines, vec![1, 2, 3]);
    }

    #[test]
    fn test_last_token_carries_line_count() {
        assert_eq!(tokenize("").last().map(|t| t.line), Some(1));
        assert_eq!(tokenize("\\c 1\n").last().map(|t| t.line), Some(2));
        assert_eq!(tokenize("a\n\nb").last().map(|t| t.line), Some(3));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let unix = tokenize("\\id GEN\n\\c 1\n\\v 1 In the beginning.");
        let windows = tokenize("\\id GEN\r\n\\c 1\r\n\\v 1 In the beginning.");
        assert_eq!(unix, windows);
    }

    #[test]
    fn test_trailing_newline_produces_an_extra_line() {
        let tokens = tokenize("\\p\n");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Paragraph, TokenKind::Text, TokenKind::Text]
        );
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn test_document_header() {
        let tokens = tokenize("\\id GEN Genesis\n\\c 1\n\\p\n\\v 1 In the beginning.");
        assert_eq!(
            tokens,
            vec![
                Token::marker(TokenKind::Book, "id", Some("GEN".to_string()), 1, 0),
                Token::text(" Genesis", 1, 7),
                Token::text("\n", 1, 15),
                Token::marker(TokenKind::Chapter, "c", Some("1".to_string()), 2, 0),
                Token::text("\n", 2, 4),
                Token::marker(TokenKind::Paragraph, "p", None, 3, 0),
                Token::text("\n", 3, 2),
                Token::marker(TokenKind::Verse, "v", Some("1".to_string()), 4, 0),
                Token::text(" In the beginning.", 4, 4),
                Token::text("\n", 4, 22),
            ]
        );
    }
}
