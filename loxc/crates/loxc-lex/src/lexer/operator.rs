//! Operator lexing.
//!
//! This module handles the operators that may be one or two characters long.
//! Each helper runs after the first character has been consumed and takes
//! the longest match.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Picks `double` if the next character is `=`, otherwise `single`.
    fn lex_with_equals(&mut self, double: TokenKind, single: TokenKind) -> Option<Token> {
        if self.cursor.match_char('=') {
            self.make(double)
        } else {
            self.make(single)
        }
    }

    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Option<Token> {
        self.lex_with_equals(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Option<Token> {
        self.lex_with_equals(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Lexes less-than or less-equal.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Option<Token> {
        self.lex_with_equals(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Lexes greater-than or greater-equal.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Option<Token> {
        self.lex_with_equals(TokenKind::GreaterEqual, TokenKind::Greater)
    }

    /// Lexes slash or a comment.
    ///
    /// Handles: `/`, `//`, `/* */`
    ///
    /// Comments produce no token.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }

        if self.cursor.match_char('*') {
            self.skip_block_comment();
            return None;
        }

        self.make(TokenKind::Slash)
    }
}
