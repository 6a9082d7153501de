use std::sync::Arc;

use log::info;
use msv_fs::{File, FileSystem, RemovalFailure};

/// Deletes invalid files from the repository.
pub struct Remover {
    fs: Arc<dyn FileSystem>,
}

impl Remover {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Remove every file; a failed deletion does not stop the others.
    pub fn remove(&self, files: &[File]) -> Option<RemovalFailure> {
        let failure = self.fs.remove_files(files);
        info!(
            "[remover] removed {} of {} files",
            files.len() - failure.as_ref().map_or(0, |f| f.files().len()),
            files.len()
        );
        failure
    }
}
