//! TreeWalker - streams a directory tree into a [`TreeOutput`] sink

use std::io;
use std::path::Path;

use crate::error::{TreeError, TreeResult};

use super::config::{ErrorPolicy, WalkerConfig};
use super::entry::{DirectoryEntry, read_sorted_entries};
use super::traversal::child_prefix;

/// Callback for streaming output - receives one call per entry, in pre-order.
pub trait TreeOutput {
    fn output_entry(&mut self, name: &str, is_dir: bool, prefix: &str) -> io::Result<()>;

    /// Called for a subdirectory that could not be listed under [`ErrorPolicy::Skip`].
    fn directory_error(&mut self, _path: &Path, _error: &TreeError) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Counts gathered over one completed walk. The root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dir_count: usize,
    pub file_count: usize,
    pub skipped_dirs: usize,
}

/// Tree walker using an explicit stack, so depth is bounded by memory
/// rather than by the call stack.
pub struct TreeWalker {
    config: WalkerConfig,
}

struct Pending {
    entry: DirectoryEntry,
    prefix: String,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` with an empty starting prefix.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> TreeResult<WalkSummary> {
        self.walk_with_prefix(root, "", output)
    }

    /// Walk `root`, prepending `prefix` to every line at the top level.
    ///
    /// The root must be a listable directory; nothing is written otherwise.
    /// Lines already written before a later error stay in the sink.
    pub fn walk_with_prefix<O: TreeOutput>(
        &self,
        root: &Path,
        prefix: &str,
        output: &mut O,
    ) -> TreeResult<WalkSummary> {
        let meta = std::fs::metadata(root).map_err(|e| TreeError::from_listing(root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let mut summary = WalkSummary::default();
        let mut stack = Vec::new();
        let children = read_sorted_entries(root)?;
        tracing::debug!(path = %root.display(), entries = children.len(), "listed root");
        push_children(&mut stack, children, prefix);

        while let Some(Pending { entry, prefix }) = stack.pop() {
            output.output_entry(entry.name(), entry.is_dir(), &prefix)?;

            if !entry.is_dir() {
                summary.file_count += 1;
                continue;
            }
            summary.dir_count += 1;

            match read_sorted_entries(entry.path()) {
                Ok(children) => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        entries = children.len(),
                        "listed directory"
                    );
                    push_children(&mut stack, children, &child_prefix(&prefix));
                }
                Err(err) if self.config.on_error == ErrorPolicy::Skip => {
                    tracing::warn!(path = %entry.path().display(), error = %err, "skipping directory");
                    summary.skipped_dirs += 1;
                    output.directory_error(entry.path(), &err)?;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            dirs = summary.dir_count,
            files = summary.file_count,
            skipped = summary.skipped_dirs,
            "walk complete"
        );
        output.finish(&summary)?;
        Ok(summary)
    }
}

/// Push in reverse so the smallest name is popped first.
fn push_children(stack: &mut Vec<Pending>, children: Vec<DirectoryEntry>, prefix: &str) {
    stack.extend(children.into_iter().rev().map(|entry| Pending {
        entry,
        prefix: prefix.to_string(),
    }));
}
