//! Identifier and keyword lexing.

use crate::chars::is_alpha_numeric;
use crate::cursor::Cursor;
use crate::keyword::keyword_from_ident;
use crate::lexer::Extraction;
use crate::token::{Token, TokenKind};

/// Scans an identifier or keyword.
///
/// Expects `cursor` to have just consumed a letter or `_`, with the lexeme
/// started on it. Reads the longest run of ASCII letters, digits and
/// underscores, then checks it against the reserved words. Neither
/// identifiers nor keywords carry a literal value.
pub fn lex_identifier(mut cursor: Cursor<'_>) -> Extraction<'_> {
    while is_alpha_numeric(cursor.peek()) {
        cursor.advance();
    }

    let lexeme = cursor.lexeme();
    let kind = keyword_from_ident(lexeme).unwrap_or(TokenKind::Identifier);
    Extraction::produced(cursor, Token::new(kind, lexeme, None, cursor.line()))
}
