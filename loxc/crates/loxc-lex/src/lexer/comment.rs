//! Comment lexing.
//!
//! This module handles skipping line and block comments. Both are entered
//! from [`Lexer::lex_slash`] once the opening `//` or `/*` has been consumed.

use crate::error::ScanError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment up to, but not including, the next newline.
    pub(crate) fn skip_line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skips a block comment.
    ///
    /// Block comments nest: every `/*` inside the comment must be matched by
    /// its own `*/`. Newlines inside the comment still count toward the line
    /// number. If the input ends first, one
    /// [`ScanError::UnterminatedComment`] is reported.
    ///
    /// The scan steps one character at a time and looks at each position
    /// together with the character after it, so in `/*/` the middle `*`
    /// pairs with both neighbours.
    pub(crate) fn skip_block_comment(&mut self) {
        let opened_on = self.cursor.line();
        let mut depth: u32 = 1;

        while depth > 0 && !self.cursor.is_at_end() {
            match (self.cursor.peek(), self.cursor.peek_next()) {
                ('*', '/') => depth -= 1,
                ('/', '*') => depth += 1,
                _ => {},
            }
            self.cursor.advance();
        }

        if depth > 0 {
            self.report(ScanError::UnterminatedComment {
                line: self.cursor.line(),
                opened_on,
            });
            return;
        }

        // The loop stopped on the '/' of the closing "*/".
        self.cursor.advance();
    }
}
