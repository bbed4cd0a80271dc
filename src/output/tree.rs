//! Tree formatter for a fully built `TreeNode`
//!
//! Lines are written depth first, one per node. The root line is the bare
//! name; every other line is `prefix + connector + name`.

use std::io::{self, BufWriter, Write};

use crate::error::{Result, TreeError};
use crate::tree::TreeNode;

use super::utils::{branch_connector, continuation_prefix};

/// Formatter for buffered tree output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut buf = Vec::new();
        self.write(node, &mut buf).expect("writing into a Vec never fails");
        String::from_utf8(buf).expect("node names are valid UTF-8")
    }

    /// Print the tree to stdout through a buffered, locked handle.
    pub fn print(&self, node: &TreeNode) -> Result<()> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.write(node, &mut out)?;
        out.flush().map_err(|source| TreeError::Write { source })
    }

    /// Write the tree to `out`. Stops at the first failed write; lines
    /// already written stay written.
    pub fn write<W: Write>(&self, node: &TreeNode, out: &mut W) -> Result<()> {
        writeln!(out, "{}", node.name()).map_err(|source| TreeError::Write { source })?;
        self.write_children(node.children(), out, "")
    }

    fn write_children<W: Write>(&self, nodes: &[TreeNode], out: &mut W, prefix: &str) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            let is_last = i == nodes.len() - 1;

            writeln!(out, "{}{}{}", prefix, branch_connector(is_last), node.name())
                .map_err(|source| TreeError::Write { source })?;

            if !node.children().is_empty() {
                let child_prefix = continuation_prefix(prefix, is_last);
                self.write_children(node.children(), out, &child_prefix)?;
            }
        }
        Ok(())
    }
}

/// Write `root` to `out` with the default formatter.
pub fn render_tree<W: Write>(root: &TreeNode, out: &mut W) -> Result<()> {
    TreeFormatter::new().write(root, out)
}
