//! Convenience entry points over `TreeWalker` + `StreamingFormatter`

use std::io::{self, Write};
use std::path::Path;

use crate::error::{TreeError, TreeResult};
use crate::tree::{TreeWalker, WalkerConfig};

use super::streaming::StreamingFormatter;

/// Print the tree under `path` to stdout, prepending `prefix` to every line.
///
/// Aborts on the first directory that cannot be listed.
pub fn print_tree(path: &Path, prefix: &str) -> TreeResult<()> {
    let stdout = io::stdout();
    write_tree(path, prefix, stdout.lock())
}

/// Write the tree under `path` to `out`.
pub fn write_tree<W: Write>(path: &Path, prefix: &str, out: W) -> TreeResult<()> {
    let mut formatter = StreamingFormatter::new(out);
    let result =
        TreeWalker::new(WalkerConfig::default()).walk_with_prefix(path, prefix, &mut formatter);
    // Keep partial output when the walk fails midway.
    let flushed = formatter.into_inner().flush();
    result?;
    flushed.map_err(TreeError::Output)
}

/// Render the whole tree under `path` into a `String`.
pub fn render_tree(path: &Path, config: WalkerConfig) -> TreeResult<String> {
    let mut formatter = StreamingFormatter::new(Vec::new());
    TreeWalker::new(config).walk(path, &mut formatter)?;
    Ok(String::from_utf8_lossy(&formatter.into_inner()).into_owned())
}
