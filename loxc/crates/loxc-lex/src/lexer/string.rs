//! String literal lexing.

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::lexer::Extraction;
use crate::token::{Literal, Token, TokenKind};

/// Scans a string literal.
///
/// Expects `cursor` to have just consumed the opening `"`, with the lexeme
/// started on it. Strings may span lines and have no escape sequences; the
/// first `"` closes the literal.
///
/// The token's lexeme includes both quotes, its literal is the text between
/// them, and its line is the line of the closing quote.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
/// use loxc_lex::lexer::lex_string;
/// use loxc_lex::Literal;
///
/// let mut cursor = Cursor::new("\"hi\" rest");
/// cursor.advance();
/// let extraction = lex_string(cursor);
/// let token = extraction.token().unwrap();
/// assert_eq!(token.lexeme, "\"hi\"");
/// assert_eq!(token.literal, Some(Literal::Str("hi".to_string())));
/// assert_eq!(extraction.cursor.peek(), ' ');
/// ```
pub fn lex_string(mut cursor: Cursor<'_>) -> Extraction<'_> {
    let opened_on = cursor.line();

    while cursor.peek() != '"' && !cursor.is_at_end() {
        cursor.advance();
    }

    if cursor.is_at_end() {
        let error = ScanError::UnterminatedString {
            line: cursor.line(),
            opened_on,
        };
        return Extraction::failed(cursor, error);
    }

    // The closing quote.
    cursor.advance();

    let lexeme = cursor.lexeme();
    let value = &lexeme[1..lexeme.len() - 1];
    let token = Token::new(
        TokenKind::String,
        lexeme,
        Some(Literal::Str(value.to_string())),
        cursor.line(),
    );
    Extraction::produced(cursor, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::literal::after_first;

    #[test]
    fn test_simple_string() {
        let extraction = lex_string(after_first("\"hello\""));
        let token = extraction.token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"hello\"");
        assert_eq!(token.literal, Some(Literal::Str("hello".to_string())));
        assert!(extraction.cursor.is_at_end());
    }

    #[test]
    fn test_empty_string() {
        let extraction = lex_string(after_first("\"\""));
        let token = extraction.token().unwrap();
        assert_eq!(token.lexeme, "\"\"");
        assert_eq!(token.literal, Some(Literal::Str(String::new())));
    }

    #[test]
    fn test_stops_at_first_quote() {
        let extraction = lex_string(after_first("\"a\"b\""));
        assert_eq!(extraction.token().unwrap().lexeme, "\"a\"");
        assert_eq!(extraction.cursor.peek(), 'b');
    }

    #[test]
    fn test_multiline_string() {
        let extraction = lex_string(after_first("\"a\nb\""));
        let token = extraction.token().unwrap();
        assert_eq!(token.literal, Some(Literal::Str("a\nb".to_string())));
        assert_eq!(token.line, 2);
        assert_eq!(extraction.cursor.line(), 2);
    }

    #[test]
    fn test_backslash_is_literal() {
        let extraction = lex_string(after_first("\"a\\nb\""));
        let token = extraction.token().unwrap();
        assert_eq!(token.literal, Some(Literal::Str("a\\nb".to_string())));
    }

    #[test]
    fn test_non_ascii_content() {
        let extraction = lex_string(after_first("\"héllo ✓\""));
        let token = extraction.token().unwrap();
        assert_eq!(token.literal, Some(Literal::Str("héllo ✓".to_string())));
    }

    #[test]
    fn test_unterminated_string() {
        let extraction = lex_string(after_first("\"abc\ndef"));
        assert_eq!(
            extraction.outcome,
            Err(ScanError::UnterminatedString { line: 2, opened_on: 1 })
        );
        assert!(extraction.cursor.is_at_end());
        assert_eq!(extraction.token(), None);
    }

    #[test]
    fn test_lone_quote() {
        let extraction = lex_string(after_first("\""));
        assert!(matches!(
            extraction.outcome,
            Err(ScanError::UnterminatedString { line: 1, .. })
        ));
    }
}
