//! Number literal lexing.

use crate::chars::is_digit;
use crate::cursor::Cursor;
use crate::lexer::Extraction;
use crate::token::{Literal, Token, TokenKind};

/// Scans a number literal.
///
/// Expects `cursor` to have just consumed the first digit, with the lexeme
/// started on it.
///
/// # Number Formats
///
/// - Integer: `42`, `007`
/// - Fractional: `3.14`
///
/// A `.` is only taken when a digit follows it, so `123.` scans as the
/// number `123` and leaves the dot for the next token. There is no sign and
/// no exponent. Every number is an `f64`.
pub fn lex_number(mut cursor: Cursor<'_>) -> Extraction<'_> {
    while is_digit(cursor.peek()) {
        cursor.advance();
    }

    if cursor.peek() == '.' && is_digit(cursor.peek_next()) {
        // Consume the "."
        cursor.advance();
        while is_digit(cursor.peek()) {
            cursor.advance();
        }
    }

    let lexeme = cursor.lexeme();
    // Digits with an optional digit-led fraction always parse.
    let value = lexeme.parse::<f64>().unwrap_or_default();
    let token = Token::new(
        TokenKind::Number,
        lexeme,
        Some(Literal::Number(value)),
        cursor.line(),
    );
    Extraction::produced(cursor, token)
}
