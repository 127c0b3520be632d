//! Result type for literal scanning.

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::token::Token;

/// What a literal scanner hands back: the advanced cursor and either the
/// token it produced or the error that stopped it.
///
/// The cursor is returned in both cases. An unterminated string still
/// consumes everything up to the end of input, and the lexer must resume
/// from there.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction<'a> {
    /// Cursor positioned just past the scanned text
    pub cursor: Cursor<'a>,
    /// The produced token, or why none was produced
    pub outcome: Result<Token, ScanError>,
}

impl<'a> Extraction<'a> {
    pub(crate) fn produced(cursor: Cursor<'a>, token: Token) -> Self {
        Self {
            cursor,
            outcome: Ok(token),
        }
    }

    pub(crate) fn failed(cursor: Cursor<'a>, error: ScanError) -> Self {
        Self {
            cursor,
            outcome: Err(error),
        }
    }

    /// The produced token, if any.
    pub fn token(&self) -> Option<&Token> {
        self.outcome.as_ref().ok()
    }
}

/// Cursor positioned as the lexer leaves it right before delegating: the
/// first character of `source` consumed and the lexeme started at offset 0.
#[cfg(test)]
pub(crate) fn after_first(source: &str) -> Cursor<'_> {
    let mut cursor = Cursor::new(source);
    cursor.mark_start();
    cursor.advance();
    cursor
}
