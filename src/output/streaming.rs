//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines to any
//! `io::Write` as the walker produces them, for use with `TreeWalker`.

use std::io::{self, Write};
use std::path::Path;

use crate::error::TreeError;
use crate::tree::{TreeOutput, WalkSummary, format_line};

/// Plain-text formatter - one `<prefix>├── <name>` line per entry.
pub struct StreamingFormatter<W: Write> {
    out: W,
    /// Receives `directory_error` reports. `None` discards them.
    diagnostics: Option<Box<dyn Write>>,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            diagnostics: None,
        }
    }

    /// Report skipped directories to `diagnostics` (stderr in the CLI).
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Write>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for StreamingFormatter<W> {
    fn output_entry(&mut self, name: &str, _is_dir: bool, prefix: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format_line(prefix, name))
    }

    fn directory_error(&mut self, path: &Path, error: &TreeError) -> io::Result<()> {
        if let Some(diag) = self.diagnostics.as_mut() {
            writeln!(
                diag,
                "dirtree: cannot open directory '{}': {}",
                path.display(),
                error
            )?;
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
