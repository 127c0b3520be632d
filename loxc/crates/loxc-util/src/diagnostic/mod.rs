//! Diagnostic module - Error reporting infrastructure.
//!
//! Every diagnostic is tagged with the 1-based source line it was raised on.
//! Reporting a diagnostic never stops the phase that raised it; the caller
//! inspects the [`Handler`] afterwards and decides whether later phases may
//! run.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! handler.report_error(DiagnosticCode::E_LEXER_UNTERMINATED_STRING, 2, "Unterminated string.");
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::fmt;

/// A line-tagged error message
///
/// `Display` renders the one-line form `[line N] Error: message`; use
/// [`Diagnostic::render`] to include the code and any notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable code identifying the kind of problem
    pub code: DiagnosticCode,
    /// Source line (1-based)
    pub line: u32,
    /// Main diagnostic message
    pub message: String,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Diagnostic, DiagnosticCode};
    ///
    /// let diag = Diagnostic::error(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR, 1, "Unexpected character.");
    /// assert_eq!(diag.line, 1);
    /// ```
    pub fn error(code: DiagnosticCode, line: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            line,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Diagnostic, DiagnosticCode};
    ///
    /// let diag = Diagnostic::error(DiagnosticCode::E_LEXER_UNTERMINATED_STRING, 4, "Unterminated string.")
    ///     .with_note("string starts on line 2");
    /// assert_eq!(diag.notes, vec!["string starts on line 2"]);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic with its code and notes, one note per line.
    ///
    /// ```text
    /// [line 4] Error[E1002]: Unterminated string.
    ///   = note: string starts on line 2
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("[line {}] Error[{}]: {}", self.line, self.code, self.message);
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// One handler covers one unit of input (a file, or a single REPL line).
/// A fresh handler starts with no errors, so a bad line typed at the prompt
/// does not poison the lines after it.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticCode, Handler};
///
/// let mut handler = Handler::new();
/// assert!(!handler.has_errors());
///
/// handler.report_error(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR, 1, "Unexpected character.");
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error at `line`
    pub fn report_error(&mut self, code: DiagnosticCode, line: u32, message: impl Into<String>) {
        self.emit(Diagnostic::error(code, line, message));
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Emit every diagnostic from an iterator, in order
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
