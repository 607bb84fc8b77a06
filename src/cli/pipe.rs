//! Pipe mode.
//!
//! Reads `NAME=VALUE` lines, resolves secret references, and writes one
//! assignment per resolved line. Lines that fail to parse or resolve are
//! reported and skipped.

use std::io::{BufRead, ErrorKind, Write};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::output::Diagnostics;
use crate::core::directive::Directive;
use crate::core::resolver::Resolver;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Shape of each emitted assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFormat {
    array: Option<String>,
    export: bool,
}

impl LineFormat {
    /// Build a format from the `--array` and `--export` options.
    ///
    /// # Errors
    ///
    /// Returns `Error::Usage` if both options are given.
    pub fn new(array: Option<String>, export: bool) -> Result<Self> {
        if export && array.is_some() {
            return Err(Error::Usage(
                "only one of -a or -e can be used at a time".to_string(),
            ));
        }
        Ok(Self { array, export })
    }

    /// Render one assignment line, newline included.
    ///
    /// - `NAME=VALUE`
    /// - `ARRAY[NAME]=VALUE` with an array name
    /// - `export NAME=VALUE` with export
    pub fn render(&self, name: &str, value: &str) -> Zeroizing<String> {
        let mut line = Zeroizing::new(String::with_capacity(name.len() + value.len() + 16));
        if self.export {
            line.push_str("export ");
        }
        match &self.array {
            Some(array) => {
                line.push_str(array);
                line.push('[');
                line.push_str(name);
                line.push_str("]=");
            }
            None => {
                line.push_str(name);
                line.push('=');
            }
        }
        line.push_str(value);
        line.push('\n');
        line
    }
}

/// Resolve every line of `input` and write assignments to `out`.
///
/// Returns the number of assignments written.
///
/// # Errors
///
/// Returns an I/O error if reading `input` or writing `out` fails. Invalid
/// UTF-8 lines, parse errors, and unresolved secrets are reported through
/// `diagnostics` and skipped.
pub fn execute<S, R, W>(
    resolver: &Resolver<S>,
    format: &LineFormat,
    diagnostics: Diagnostics,
    input: R,
    mut out: W,
) -> Result<usize>
where
    S: SecretStore,
    R: BufRead,
    W: Write,
{
    info!("pipe mode: reading assignments from input");
    diagnostics.warn(
        "make sure to pipe the result into another command instead of printing secrets to the terminal",
    );

    let mut written = 0;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                diagnostics.error(format!("error reading line: {}", e));
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        // blank lines carry no assignment; skip them without a diagnostic
        if line.trim().is_empty() {
            continue;
        }

        let directive = match Directive::parse(&line) {
            Ok(directive) => directive,
            Err(e) => {
                diagnostics.error(e);
                continue;
            }
        };

        match resolver.resolve_directive(&directive) {
            Ok(value) => {
                let value = Zeroizing::new(value);
                out.write_all(format.render(directive.name(), &value).as_bytes())?;
                out.flush()?;
                written += 1;
                debug!(directive = %directive, "wrote assignment");
            }
            Err(e) => diagnostics.error(e),
        }
    }

    Ok(written)
}
