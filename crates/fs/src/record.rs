use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

/// A regular file discovered under a scan root.
///
/// Immutable once constructed. The root is shared between all files of one
/// walk, so cloning a `File` is cheap apart from its path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
    /// Text after the last `.` of the file name, `None` if there is no dot
    /// or nothing follows it. Case is preserved.
    extension: Option<String>,
    root: Arc<Path>,
}

impl File {
    /// Create a file, deriving its extension from the file name.
    pub fn new(path: impl Into<PathBuf>, root: impl Into<Arc<Path>>) -> Self {
        let path = path.into();
        let extension = path
            .file_name()
            .and_then(|name| extension_of(&name.to_string_lossy()));

        Self {
            path,
            extension,
            root: root.into(),
        }
    }

    /// Create a file with an explicitly given extension.
    pub fn with_extension(
        path: impl Into<PathBuf>,
        extension: Option<&str>,
        root: impl Into<Arc<Path>>,
    ) -> Self {
        Self {
            path: path.into(),
            extension: extension.filter(|e| !e.is_empty()).map(str::to_owned),
            root: root.into(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Shared handle to the scan root, for files derived from this one.
    #[inline]
    pub fn root_handle(&self) -> Arc<Path> {
        Arc::clone(&self.root)
    }

    /// Final component of the path.
    pub fn name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn has_extension_ignore_case(&self, candidate: &str) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(candidate))
    }

    /// Path relative to the scan root, always rendered with `/` separators.
    ///
    /// Falls back to the full path when the root is not an ancestor.
    pub fn relative_path(&self) -> String {
        let relative = self.path.strip_prefix(&self.root).unwrap_or(&self.path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
