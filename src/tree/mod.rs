//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, sorts its children and streams
//! one callback per entry to a [`TreeOutput`] in depth-first pre-order.

mod config;
mod entry;
mod traversal;
mod walker;

pub use config::{ErrorPolicy, WalkerConfig};
pub use entry::{DirectoryEntry, read_sorted_entries};
pub use traversal::{BRANCH, CONTINUATION, child_prefix, format_line};
pub use walker::{TreeOutput, TreeWalker, WalkSummary};
