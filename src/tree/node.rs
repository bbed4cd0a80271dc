//! In-memory tree built by the walker

use std::path::{Path, PathBuf};

/// One filesystem entry. Files are leaves; only directories own children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children in listing order. Always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Depth-first lookup of the node at `path`, including `self`.
    pub fn find(&self, path: &Path) -> Option<&TreeNode> {
        if self.path() == path {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(path))
    }

    /// Number of directories and files below this node, not counting itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| {
                let (d, f) = child.counts();
                if child.is_dir() {
                    (dirs + d + 1, files + f)
                } else {
                    (dirs + d, files + f + 1)
                }
            })
    }
}
