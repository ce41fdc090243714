//! Configuration types for tree walkers

/// What to do when a directory below the root cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the walk and return the error.
    #[default]
    Abort,
    /// Report the directory through the output sink and keep walking.
    Skip,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub on_error: ErrorPolicy,
}

impl WalkerConfig {
    /// Configuration that reports unreadable subdirectories instead of aborting.
    pub fn keep_going() -> Self {
        Self {
            on_error: ErrorPolicy::Skip,
        }
    }
}
