//! Lexical errors.
//!
//! None of these stop the scan. The lexer records each one, skips the
//! offending text, and keeps going, so a single pass reports every problem in
//! the input.

use loxc_util::{Diagnostic, DiagnosticCode};
use thiserror::Error;

/// An error found while scanning.
///
/// `Display` gives the user-facing message; [`ScanError::line`] gives the line
/// the lexer was on when it gave up on the lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that cannot start any token.
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// Line of the character
        line: u32,
        /// The character itself
        found: char,
    },

    /// Input ended inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line at end of input
        line: u32,
        /// Line of the opening quote
        opened_on: u32,
    },

    /// Input ended inside a block comment.
    #[error("Unterminated comment.")]
    UnterminatedComment {
        /// Line at end of input
        line: u32,
        /// Line of the outermost `/*`
        opened_on: u32,
    },
}

impl ScanError {
    /// Line the error is reported on.
    pub fn line(&self) -> u32 {
        match *self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line, .. }
            | ScanError::UnterminatedComment { line, .. } => line,
        }
    }

    /// Stable diagnostic code for this kind of error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ScanError::UnterminatedComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// Converts into a line-tagged diagnostic with explanatory notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.line(), self.to_string());
        match *self {
            ScanError::UnexpectedCharacter { found, .. } => {
                diag.with_note(format!("found {:?}", found))
            },
            ScanError::UnterminatedString { opened_on, .. } => {
                diag.with_note(format!("string starts on line {}", opened_on))
            },
            ScanError::UnterminatedComment { opened_on, .. } => {
                diag.with_note(format!("comment starts on line {}", opened_on))
            },
        }
    }
}

impl From<ScanError> for Diagnostic {
    fn from(error: ScanError) -> Self {
        error.to_diagnostic()
    }
}
