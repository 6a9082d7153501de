use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::record::File;

/// The scan root could not be enumerated (missing, not a directory,
/// unreadable, or an I/O error while descending).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the directory '{}' cannot be accessed", root.display())]
pub struct RootAccessFailure {
    root: PathBuf,
}

impl RootAccessFailure {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Aggregate of every file a batch deletion failed to remove. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("files could not be removed: {}", FileList(.files))]
pub struct RemovalFailure {
    files: Vec<File>,
}

impl RemovalFailure {
    /// Wrap the unremovable files, or `None` if there are none.
    pub fn new(files: Vec<File>) -> Option<Self> {
        if files.is_empty() {
            None
        } else {
            Some(Self { files })
        }
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
    }
}

/// Renders files as `[a, b, c]`.
pub struct FileList<'a>(pub &'a [File]);

impl fmt::Display for FileList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, file) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{file}")?;
        }
        f.write_str("]")
    }
}
