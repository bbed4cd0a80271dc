//! TreeWalker - builds the full tree in memory

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Result, TreeError};

use super::config::{SymlinkPolicy, WalkerConfig};
use super::node::TreeNode;
use super::utils::{get_name, list_entries, resolve_root};

/// Tree walker that builds the full tree in memory before anything is printed.
/// Any filesystem error aborts the whole walk.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the subtree rooted at `root`.
    ///
    /// The root is made absolute and cleaned, then inspected with symlinks
    /// followed. Entries below it are inspected without following symlinks.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let root = resolve_root(root)?;
        debug!("walking {}", root.display());

        let metadata = fs::metadata(&root).map_err(|source| TreeError::Metadata {
            path: root.clone(),
            source,
        })?;

        let tree = if metadata.is_dir() {
            self.walk_dir(root)?
        } else {
            TreeNode::File {
                name: get_name(&root),
                path: root,
            }
        };

        let (dir_count, file_count) = tree.counts();
        debug!(
            "walk complete: {} directories, {} files",
            dir_count, file_count
        );
        Ok(tree)
    }

    fn walk_dir(&self, path: PathBuf) -> Result<TreeNode> {
        let mut children = Vec::new();

        for entry_path in list_entries(&path)? {
            let metadata =
                fs::symlink_metadata(&entry_path).map_err(|source| TreeError::Metadata {
                    path: entry_path.clone(),
                    source,
                })?;
            trace!("visiting {}", entry_path.display());

            if metadata.file_type().is_symlink() {
                match self.config.symlink_policy {
                    SymlinkPolicy::StopListing => {
                        debug!(
                            "symlink {} stops listing of {}",
                            entry_path.display(),
                            path.display()
                        );
                        break;
                    }
                    SymlinkPolicy::Skip => {
                        debug!("skipping symlink {}", entry_path.display());
                        continue;
                    }
                }
            }

            if metadata.is_dir() {
                children.push(self.walk_dir(entry_path)?);
            } else {
                children.push(TreeNode::File {
                    name: get_name(&entry_path),
                    path: entry_path,
                });
            }
        }

        Ok(TreeNode::Dir {
            name: get_name(&path),
            path,
            children,
        })
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Walk `root` with the default configuration.
pub fn build_tree(root: &Path) -> Result<TreeNode> {
    TreeWalker::default().walk(root)
}
