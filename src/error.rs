//! Error type shared by the tree walker and the formatter

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot resolve '{}': {}", .path.display(), .source)]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {}", .path.display(), .source)]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::Resolve { path, .. }
            | TreeError::Metadata { path, .. }
            | TreeError::ReadDir { path, .. } => Some(path.as_path()),
            TreeError::Write { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_cause() {
        let err = TreeError::Metadata {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("/no/such/dir"), "{}", message);
        assert!(message.contains("No such file or directory"), "{}", message);
        assert_eq!(err.path(), Some(Path::new("/no/such/dir")));
    }

    #[test]
    fn test_write_error_has_no_path() {
        let err = TreeError::Write {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        };
        assert!(err.path().is_none());
        assert!(err.to_string().starts_with("error writing output"));
    }
}
