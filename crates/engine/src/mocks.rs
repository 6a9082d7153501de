use std::path::Path;

use mockall::mock;
use msv_fs::{File, FileSystem, RemovalFailure, RootAccessFailure};

mock! {
    pub Fs {}

    impl FileSystem for Fs {
        fn list_files(&self, root: &Path) -> Result<Vec<File>, RootAccessFailure>;
        fn read_bytes(&self, file: &File) -> Option<Vec<u8>>;
        fn read_text(&self, file: &File) -> Option<String>;
        fn sibling_file(&self, file: &File, name: &str) -> Option<File>;
        fn remove_files(&self, files: &[File]) -> Option<RemovalFailure>;
    }
}
