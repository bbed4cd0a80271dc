//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `utils` - Branch glyphs and prefix calculation
//! - `tree` - Formatter that writes a built tree line by line

mod tree;
mod utils;

// Re-export public types and functions
pub use tree::{TreeFormatter, render_tree};
pub use utils::{
    BLANK_INDENT, BRANCH_LAST, BRANCH_MIDDLE, VERTICAL_LINE, branch_connector, continuation_prefix,
};
