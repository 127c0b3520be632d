//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its dispatch loop and the
//! [`ScanOutput`] a full scan produces.

use loxc_util::Diagnostic;

use crate::chars::{is_alpha, is_digit};
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::lexer::{lex_identifier, lex_number, lex_string, Extraction};
use crate::token::{Token, TokenKind};

/// Lexer for the Lox language.
///
/// The lexer turns source text into tokens one lexeme at a time. Whitespace
/// and comments are skipped. Lexical errors are collected rather than
/// returned, so scanning always runs to the end of the input and the token
/// stream always ends with exactly one [`TokenKind::Eof`].
///
/// A `Lexer` is an [`Iterator`] over tokens; [`Lexer::scan_tokens`] drains
/// it and returns the tokens together with the errors.
///
/// # Example
///
/// ```
/// use loxc_lex::{Lexer, TokenKind};
///
/// let output = Lexer::new("print 1;").scan_tokens();
/// let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Print, TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]
/// );
/// assert!(!output.has_errors());
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Errors reported so far, in source order.
    errors: Vec<ScanError>,

    /// Whether the EOF token has been handed out.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Scans the whole input.
    ///
    /// The returned tokens are in source order and end with `EOF`. Errors do
    /// not stop the scan; all of them are returned alongside the tokens.
    pub fn scan_tokens(mut self) -> ScanOutput {
        let tokens: Vec<Token> = self.by_ref().collect();
        ScanOutput {
            tokens,
            errors: self.errors,
        }
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Scans a single lexeme starting at the current position.
    ///
    /// Returns `None` when the lexeme produced no token: whitespace, a
    /// comment, or a lexical error.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();
        match c {
            '(' => self.make(TokenKind::LeftParen),
            ')' => self.make(TokenKind::RightParen),
            '{' => self.make(TokenKind::LeftBrace),
            '}' => self.make(TokenKind::RightBrace),
            ',' => self.make(TokenKind::Comma),
            '.' => self.make(TokenKind::Dot),
            '-' => self.make(TokenKind::Minus),
            '+' => self.make(TokenKind::Plus),
            ';' => self.make(TokenKind::Semicolon),
            '*' => self.make(TokenKind::Star),
            '%' => self.make(TokenKind::Percent),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            // The cursor counts newlines as it steps over them.
            ' ' | '\r' | '\t' | '\n' => None,
            '"' => self.extract(lex_string),
            c if is_digit(c) => self.extract(lex_number),
            c if is_alpha(c) => self.extract(lex_identifier),
            found => {
                self.report(ScanError::UnexpectedCharacter {
                    line: self.cursor.line(),
                    found,
                });
                None
            },
        }
    }

    /// Hands the cursor to a literal scanner and takes back whatever it
    /// consumed.
    fn extract(&mut self, scan: fn(Cursor<'a>) -> Extraction<'a>) -> Option<Token> {
        let Extraction { cursor, outcome } = scan(self.cursor);
        self.cursor = cursor;
        match outcome {
            Ok(token) => Some(token),
            Err(error) => {
                self.report(error);
                None
            },
        }
    }

    /// Builds a token of `kind` from the current lexeme, with no literal.
    pub(crate) fn make(&self, kind: TokenKind) -> Option<Token> {
        Some(Token::new(kind, self.cursor.lexeme(), None, self.cursor.line()))
    }

    /// Records a lexical error and carries on.
    pub(crate) fn report(&mut self, error: ScanError) {
        tracing::debug!(line = error.line(), code = %error.code(), "{}", error);
        self.errors.push(error);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        while !self.cursor.is_at_end() {
            self.cursor.mark_start();
            if let Some(token) = self.scan_token() {
                tracing::trace!(kind = %token.kind, line = token.line, "token");
                return Some(token);
            }
        }

        self.finished = true;
        Some(Token::eof(self.cursor.line()))
    }
}

/// Everything one scan produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, ending with `EOF`
    pub tokens: Vec<Token>,
    /// Lexical errors in source order
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    /// Returns true if any lexical error was reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ScanError::to_diagnostic).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Literal;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source() {
        let output = Lexer::new("").scan_tokens();
        assert_eq!(output.tokens, vec![Token::eof(1)]);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(){},.-+;*%"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Percent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_only() {
        let output = Lexer::new(" \t\r\n\n").scan_tokens();
        assert_eq!(output.tokens, vec![Token::eof(3)]);
    }

    #[test]
    fn test_var_declaration() {
        let output = Lexer::new("var x = 10;").scan_tokens();
        let tokens = output.tokens;
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0], Token::new(TokenKind::Var, "var", None, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", None, 1));
        assert_eq!(tokens[2], Token::new(TokenKind::Equal, "=", None, 1));
        assert_eq!(
            tokens[3],
            Token::new(TokenKind::Number, "10", Some(Literal::Number(10.0)), 1)
        );
        assert_eq!(tokens[4], Token::new(TokenKind::Semicolon, ";", None, 1));
        assert!(tokens[5].is_eof());
    }

    #[test]
    fn test_unexpected_character_is_skipped() {
        let output = Lexer::new("a # b").scan_tokens();
        let lexemes: Vec<_> = output.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "b", ""]);
        assert_eq!(
            output.errors,
            vec![ScanError::UnexpectedCharacter { line: 1, found: '#' }]
        );
    }

    #[test]
    fn test_multibyte_unexpected_character_reports_once() {
        let output = Lexer::new("λ").scan_tokens();
        assert_eq!(output.tokens, vec![Token::eof(1)]);
        assert_eq!(
            output.errors,
            vec![ScanError::UnexpectedCharacter { line: 1, found: 'λ' }]
        );
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let output = Lexer::new("@\n$\n\"open").scan_tokens();
        let lines: Vec<_> = output.errors.iter().map(ScanError::line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(matches!(
            output.errors[2],
            ScanError::UnterminatedString { opened_on: 3, .. }
        ));
    }

    #[test]
    fn test_iterator_yields_eof_once() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_errors_visible_while_iterating() {
        let mut lexer = Lexer::new("? x");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(lexer.errors().len(), 1);
    }

    #[test]
    fn test_line_tracks_newlines() {
        let mut lexer = Lexer::new("a\nb\n");
        lexer.next();
        assert_eq!(lexer.line(), 1);
        lexer.next();
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.next().map(|t| t.line), Some(3));
    }

    #[test]
    fn test_diagnostics_follow_errors() {
        let output = Lexer::new("#").scan_tokens();
        let diagnostics = output.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].to_string(), "[line 1] Error: Unexpected character.");
    }
}
