//! dirtree - print a directory tree as indented text

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{TreeError, TreeResult};
pub use output::{StreamingFormatter, print_tree, render_tree, write_tree};
pub use tree::{ErrorPolicy, TreeOutput, TreeWalker, WalkSummary, WalkerConfig};
