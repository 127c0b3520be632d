//! Token output.

use std::io::Write;

use loxc_lex::Token;

use crate::config::{EmitKind, OutputConfig};
use crate::error::Result;

/// Writes `tokens` to `out` in the configured format.
///
/// Returns how many tokens were written.
pub fn emit_tokens<W: Write>(tokens: &[Token], config: &OutputConfig, out: &mut W) -> Result<usize> {
    let shown: Vec<&Token> = tokens
        .iter()
        .filter(|token| config.show_eof || !token.is_eof())
        .collect();

    match config.emit {
        EmitKind::Tokens => {
            for token in &shown {
                writeln!(out, "{}", token)?;
            }
        },
        EmitKind::Json => {
            serde_json::to_writer_pretty(&mut *out, &shown)?;
            writeln!(out)?;
        },
    }

    out.flush()?;
    Ok(shown.len())
}
