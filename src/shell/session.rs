use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::core::Namespace;
use crate::error::ShellError;
use crate::shell::{Outcome, dispatch, tokenize};

/// Feeds input lines to a namespace and writes one rendered [`Outcome`] per command.
///
/// Errors from the namespace or from parsing never stop the loop; only I/O failures do.
#[derive(Debug)]
pub struct Shell<N: Namespace> {
    namespace: N,
}

impl<N: Namespace> Shell<N> {
    pub fn new(namespace: N) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    pub fn into_inner(self) -> N {
        self.namespace
    }

    /// Runs a single line. Returns `None` for blank lines.
    pub fn execute_line(&mut self, line: &str) -> Option<Outcome> {
        let args = tokenize(line);
        if args.is_empty() {
            return None;
        }
        Some(dispatch(&mut self.namespace, &args))
    }

    /// Reads `input` until EOF. Returns the number of commands executed.
    ///
    /// A line that is not valid UTF-8 is reported as unrecognized input and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<usize> {
        let mut executed = 0;
        for (idx, raw) in input.split(b'\n').enumerate() {
            let raw = raw.with_context(|| format!("failed to read input line {}", idx + 1))?;
            let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
            let outcome = match std::str::from_utf8(bytes) {
                Ok(line) => match self.execute_line(line) {
                    Some(outcome) => outcome,
                    None => continue,
                },
                Err(e) => {
                    warn!(line = idx + 1, error = %e, "input line is not valid UTF-8");
                    Outcome::Rejected(ShellError::UnrecognizedCommand(
                        String::from_utf8_lossy(bytes).into_owned(),
                    ))
                }
            };
            executed += 1;
            if !outcome.is_success() {
                debug!(line = idx + 1, %outcome, "command failed");
            }
            writeln!(output, "{outcome}").context("failed to write output")?;
        }
        output.flush().context("failed to flush output")?;
        info!(executed, "input exhausted");
        Ok(executed)
    }
}
