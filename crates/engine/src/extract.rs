use std::sync::Arc;

use log::debug;
use msv_fs::{File, FileSystem};
use msv_runtime::SIDECAR_EXTENSION;

/// Looks up the digest a file is expected to have.
#[cfg_attr(test, mockall::automock)]
pub trait DigestExtractor: Send + Sync {
    /// The expected digest, or `None` if there is no readable checksum file.
    fn extract(&self, file: &File) -> Option<String>;
}

/// Reads the expected digest from the `<name>.sha1` file next to the artifact.
pub struct SidecarExtractor {
    fs: Arc<dyn FileSystem>,
}

impl SidecarExtractor {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl DigestExtractor for SidecarExtractor {
    fn extract(&self, file: &File) -> Option<String> {
        let name = sidecar_name(file);

        let Some(sidecar) = self.fs.sibling_file(file, &name) else {
            debug!("[extract] no {} next to {}", name, file);
            return None;
        };
        let Some(text) = self.fs.read_text(&sidecar) else {
            debug!("[extract] {} is unreadable", sidecar);
            return None;
        };

        Some(parse_sidecar(&text))
    }
}

/// File name of the checksum file belonging to `file`.
pub fn sidecar_name(file: &File) -> String {
    format!("{}.{}", file.name(), SIDECAR_EXTENSION)
}

/// Digest part of a checksum file.
///
/// Accepts a bare digest or the coreutils `<digest>  <file name>` layout:
/// everything before the first space, or the whole trimmed text when there
/// is no space. The result is not checked for being valid hex.
pub fn parse_sidecar(text: &str) -> String {
    match text.find(' ') {
        Some(idx) => text[..idx].to_owned(),
        None => text.trim().to_owned(),
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
