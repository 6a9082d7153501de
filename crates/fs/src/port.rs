use std::path::Path;

use crate::{
    error::{RemovalFailure, RootAccessFailure},
    record::File,
};

/// Storage capabilities the validator needs.
///
/// Per-file failures are reported as `None` without a cause; callers treat
/// them as "could not be processed".
pub trait FileSystem: Send + Sync {
    /// Recursively list every regular file under `root`. Directories are not
    /// returned.
    fn list_files(&self, root: &Path) -> Result<Vec<File>, RootAccessFailure>;

    /// Full content of `file`.
    fn read_bytes(&self, file: &File) -> Option<Vec<u8>>;

    /// Content of `file` decoded as UTF-8.
    fn read_text(&self, file: &File) -> Option<String>;

    /// The regular file called `name` in the same directory as `file`, if it
    /// exists. It inherits the scan root of `file`.
    fn sibling_file(&self, file: &File, name: &str) -> Option<File>;

    /// Delete every file independently. Returns the ones that could not be
    /// deleted, or `None` if all were removed.
    fn remove_files(&self, files: &[File]) -> Option<RemovalFailure>;
}
