//! Branch glyphs and prefix calculation

/// Connector for an entry that has siblings after it.
pub const BRANCH_MIDDLE: &str = "├── ";
/// Connector for the last entry of a directory.
pub const BRANCH_LAST: &str = "└── ";
/// Prefix unit below an entry that has siblings after it.
pub const VERTICAL_LINE: &str = "│   ";
/// Prefix unit below the last entry of a directory.
pub const BLANK_INDENT: &str = "    ";

pub fn branch_connector(is_last: bool) -> &'static str {
    if is_last { BRANCH_LAST } else { BRANCH_MIDDLE }
}

/// Calculate the prefix passed down to an entry's children.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK_INDENT)
    } else {
        format!("{}{}", prefix, VERTICAL_LINE)
    }
}
