//! Reserved words.
//!
//! Lookup is exact and case-sensitive: `class` is a keyword, `Class` and
//! `classy` are identifiers.

use crate::token::TokenKind;

/// Every reserved word paired with its token kind.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Returns the reserved kind for `ident`, or `None` if it is an ordinary name.
///
/// # Example
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fun"), Some(TokenKind::Fun));
/// assert_eq!(keyword_from_ident("Fun"), None);
/// assert_eq!(keyword_from_ident("funny"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|&(_, kind)| kind)
}
