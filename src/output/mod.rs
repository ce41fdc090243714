//! Tree formatting and display
//!
//! - `streaming` - `StreamingFormatter`, writes lines as the walker emits them
//! - `tree` - `print_tree`/`write_tree`/`render_tree` entry points

mod streaming;
mod tree;

pub use streaming::StreamingFormatter;
pub use tree::{print_tree, render_tree, write_tree};
