//! loxc-util - Shared infrastructure for the loxc toolchain
//!
//! This crate holds the pieces every phase of the toolchain agrees on. Right
//! now that is the diagnostics layer: a [`Diagnostic`] record tagged with a
//! source line and a stable [`DiagnosticCode`], and a [`Handler`] that
//! collects them for one unit of input.
//!
//! # Example
//!
//! ```
//! use loxc_util::{Diagnostic, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! handler.emit(Diagnostic::error(
//!     DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
//!     3,
//!     "Unexpected character.",
//! ));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 3] Error: Unexpected character.");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler};
