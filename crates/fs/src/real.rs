use std::{fs, path::Path};

use log::{debug, warn};
use msv_runtime::default_worker_count;

use crate::{
    error::{RemovalFailure, RootAccessFailure},
    port::FileSystem,
    record::File,
    walker::walk_parallel,
};

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone)]
pub struct RealFileSystem {
    walk_threads: usize,
}

impl RealFileSystem {
    pub fn new(walk_threads: usize) -> Self {
        RealFileSystem {
            walk_threads: walk_threads.max(1),
        }
    }

    pub fn walk_threads(&self) -> usize {
        self.walk_threads
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        RealFileSystem::new(default_worker_count())
    }
}

impl FileSystem for RealFileSystem {
    fn list_files(&self, root: &Path) -> Result<Vec<File>, RootAccessFailure> {
        walk_parallel(root, self.walk_threads)
    }

    fn read_bytes(&self, file: &File) -> Option<Vec<u8>> {
        fs::read(file.path())
            .map_err(|e| debug!("[fs] cannot read {}: {e}", file))
            .ok()
    }

    fn read_text(&self, file: &File) -> Option<String> {
        fs::read_to_string(file.path())
            .map_err(|e| debug!("[fs] cannot read text of {}: {e}", file))
            .ok()
    }

    fn sibling_file(&self, file: &File, name: &str) -> Option<File> {
        let sibling = file.path().with_file_name(name);
        match fs::metadata(&sibling) {
            Ok(meta) if meta.is_file() => Some(File::new(sibling, file.root_handle())),
            _ => None,
        }
    }

    fn remove_files(&self, files: &[File]) -> Option<RemovalFailure> {
        let unremovable: Vec<File> = files
            .iter()
            .filter(|file| match fs::remove_file(file.path()) {
                Ok(()) => {
                    debug!("[fs] removed {}", file);
                    false
                }
                Err(e) => {
                    warn!("[fs] cannot remove {}: {e}", file);
                    true
                }
            })
            .cloned()
            .collect();

        RemovalFailure::new(unremovable)
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
