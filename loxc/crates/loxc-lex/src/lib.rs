//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat list of tokens for a parser
//! to consume.
//!
//! # Overview
//!
//! Scanning is a single left-to-right pass. Each lexeme becomes one
//! [`Token`] carrying its kind, its exact source text, an optional literal
//! value, and the line it ended on. Lexical errors never stop the scan: they
//! are collected and returned next to the tokens, and the token list always
//! ends with exactly one `EOF`.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Literal, TokenKind};
//!
//! let output = scan("var answer = 42;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[0].kind, TokenKind::Var);
//! assert_eq!(output.tokens[3].literal, Some(Literal::Number(42.0)));
//! assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and tokens
//! - [`keyword`] - Reserved word table
//! - [`chars`] - Character classifiers
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexer`] - Main lexer and literal scanners
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `fun`, `for`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (always `f64`, no sign, no exponent)
//! - **String**: `"hello"` (may span lines, no escapes)
//!
//! ## Operators and Delimiters
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `/` `*` `%`
//! `!` `!=` `=` `==` `>` `>=` `<` `<=`
//!
//! ## Comments
//!
//! `// to end of line` and `/* block */`. Block comments nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::ScanError;
pub use keyword::{keyword_from_ident, KEYWORDS};
pub use lexer::{Lexer, ScanOutput};
pub use token::{Literal, Token, TokenKind};

/// Scans `source` into tokens and lexical errors.
///
/// Shorthand for `Lexer::new(source).scan_tokens()`. Every call starts from
/// a clean state, so errors from one input never carry over to the next.
pub fn scan(source: &str) -> ScanOutput {
    let output = Lexer::new(source).scan_tokens();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned source"
    );
    output
}
