//! Twig - print a directory subtree as a tree diagram

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{TreeFormatter, render_tree};
pub use tree::{SymlinkPolicy, TreeNode, TreeWalker, WalkerConfig, build_tree};
