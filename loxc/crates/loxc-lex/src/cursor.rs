//! Character cursor for traversing source code.
//!
//! This module provides the [`Cursor`] struct which holds all of the lexer's
//! position state: where the current lexeme starts, how far scanning has
//! advanced, and which line that position is on.
//!
//! `Cursor` is `Copy`. Literal extraction takes a cursor by value, scans
//! forward, and hands the advanced cursor back, so each literal kind can be
//! driven and checked without a [`Lexer`](crate::Lexer).

/// A cursor over one immutable source buffer.
///
/// Positions are byte offsets that always sit on a `char` boundary. The line
/// counter is bumped by [`advance`](Cursor::advance) every time it steps over
/// a `'\n'`, wherever that newline appears.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the first character of the current lexeme.
    start: usize,

    /// Byte offset just past the last consumed character.
    current: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the beginning of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Returns true if every character has been consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `'\0'` without moving if already at the end.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.char_at(self.current) else {
            return '\0';
        };
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Returns the next character without consuming it, or `'\0'` at the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(self.current).unwrap_or('\0')
    }

    /// Returns the character after [`peek`](Cursor::peek), or `'\0'` past the end.
    #[inline]
    pub fn peek_next(&self) -> char {
        let Some(c) = self.char_at(self.current) else {
            return '\0';
        };
        self.char_at(self.current + c.len_utf8()).unwrap_or('\0')
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Begins a new lexeme at the current position.
    #[inline]
    pub fn mark_start(&mut self) {
        self.start = self.current;
    }

    /// Returns the source text of the current lexeme.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("or and");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.lexeme(), "or");
    /// ```
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Byte offset where the current lexeme starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next character to be consumed.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        let b = *self.source.as_bytes().get(offset)?;
        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }
        self.source[offset..].chars().next()
    }
}
