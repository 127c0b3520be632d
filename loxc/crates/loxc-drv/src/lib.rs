//! loxc-drv - Scanner Driver
//!
//! Runs the Lox scanner over a script file or an interactive prompt, reports
//! lexical diagnostics, and writes the resulting tokens.
//!
//! Every input unit (a whole file, or one prompt line) is scanned from a
//! clean state. Diagnostics from one unit never leak into the next.
//!
//! # Example
//!
//! ```
//! use loxc_drv::{Config, Driver};
//!
//! let driver = Driver::new(Config::default());
//! let mut out = Vec::new();
//! let outcome = driver.run_source("print 1;", &mut out).unwrap();
//! assert!(!outcome.has_errors());
//! assert_eq!(outcome.tokens_emitted, 4);
//! assert!(String::from_utf8(out).unwrap().starts_with("PRINT print\n"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod output;

use std::io::{BufRead, Write};
use std::path::Path;

use loxc_util::Handler;

pub use config::{Config, EmitKind, OutputConfig, ReplConfig};
pub use error::{DriverError, Result};

/// What running one input unit produced.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Number of tokens written to the output.
    pub tokens_emitted: usize,
    /// Lexical diagnostics for this unit.
    pub diagnostics: Handler,
}

impl RunOutcome {
    /// Returns true if scanning reported any error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Scanner driver.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    config: Config,
}

impl Driver {
    /// Creates a driver with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans `source` and writes its tokens to `out`.
    ///
    /// If scanning reports any error, nothing is written and the diagnostics
    /// are returned in the outcome.
    pub fn run_source<W: Write>(&self, source: &str, out: &mut W) -> Result<RunOutcome> {
        let scanned = loxc_lex::scan(source);

        let mut diagnostics = Handler::new();
        diagnostics.extend(scanned.diagnostics());

        if diagnostics.has_errors() {
            tracing::debug!(
                errors = diagnostics.error_count(),
                "suppressing output for input with errors"
            );
            return Ok(RunOutcome {
                tokens_emitted: 0,
                diagnostics,
            });
        }

        let tokens_emitted = output::emit_tokens(&scanned.tokens, &self.config.output, out)?;
        Ok(RunOutcome {
            tokens_emitted,
            diagnostics,
        })
    }

    /// Reads and runs the script at `path`.
    ///
    /// Diagnostics are written to `err`. Invalid UTF-8 in the file is
    /// replaced rather than rejected.
    pub fn run_file<W: Write, E: Write>(
        &self,
        path: &Path,
        out: &mut W,
        err: &mut E,
    ) -> Result<RunOutcome> {
        tracing::debug!(path = %path.display(), "running script");

        let bytes = std::fs::read(path).map_err(|source| DriverError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);

        let outcome = self.run_source(&source, out)?;
        self.report(&outcome, err)?;
        Ok(outcome)
    }

    /// Runs an interactive prompt until `input` is exhausted.
    ///
    /// Each line is scanned on its own, so its line numbers start at 1 and
    /// an error on one line does not affect the next. Returns the number of
    /// lines run.
    pub fn run_prompt<R: BufRead, W: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<usize> {
        let mut lines = 0;
        let mut line = String::new();

        loop {
            write!(out, "{}", self.config.repl.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            lines += 1;

            let source = line.trim_end_matches(&['\n', '\r'][..]);
            let outcome = self.run_source(source, out)?;
            self.report(&outcome, err)?;
        }

        tracing::debug!(lines, "prompt closed");
        Ok(lines)
    }

    /// Writes the outcome's diagnostics to `err`, one per line.
    ///
    /// Verbose mode adds the diagnostic code and notes.
    pub fn report<E: Write>(&self, outcome: &RunOutcome, err: &mut E) -> Result<()> {
        for diagnostic in outcome.diagnostics.diagnostics() {
            if self.config.verbose {
                writeln!(err, "{}", diagnostic.render())?;
            } else {
                writeln!(err, "{}", diagnostic)?;
            }
        }
        err.flush()?;
        Ok(())
    }
}
