//! Character classes used by the lexer.
//!
//! All predicates are ASCII-only. Letters outside `a-z`/`A-Z` are not
//! identifier characters, even if Unicode considers them alphabetic.

/// Checks if a character is a decimal digit (`0`-`9`).
///
/// # Example
///
/// ```
/// use loxc_lex::chars::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('x'));
/// assert!(!is_digit('٣')); // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier (`a`-`z`, `A`-`Z`, `_`).
///
/// # Example
///
/// ```
/// use loxc_lex::chars::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use loxc_lex::chars::is_alpha_numeric;
///
/// assert!(is_alpha_numeric('a'));
/// assert!(is_alpha_numeric('9'));
/// assert!(is_alpha_numeric('_'));
/// assert!(!is_alpha_numeric('-'));
/// ```
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
