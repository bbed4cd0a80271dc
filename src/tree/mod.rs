//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, depth first, and builds the whole
//! `TreeNode` tree before any output is produced.

mod config;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::{SymlinkPolicy, WalkerConfig};
pub use node::TreeNode;
pub use utils::{get_name, is_hidden, list_entries, resolve_root};
pub use walker::{TreeWalker, build_tree};
