//! Configuration types for the tree walker

/// What the walker does when a directory entry is a symbolic link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Stop listing the current directory at the first symbolic link.
    /// Entries listed before the link are kept, the rest are dropped.
    #[default]
    StopListing,
    /// Leave out the link itself and keep listing its siblings.
    Skip,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub symlink_policy: SymlinkPolicy,
}

impl WalkerConfig {
    pub fn with_symlink_policy(mut self, policy: SymlinkPolicy) -> Self {
        self.symlink_policy = policy;
        self
    }
}
