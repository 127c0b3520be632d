//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and scan output
//! - `operator` - One- and two-character operators
//! - `comment` - Line and nested block comments
//! - `literal` - The [`Extraction`] result shared by literal scanners
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod literal;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, ScanOutput};
pub use identifier::lex_identifier;
pub use literal::Extraction;
pub use number::lex_number;
pub use string::lex_string;
