use std::sync::Arc;

use log::debug;
use msv_fs::{File, FileSystem};
use sha1::{Digest, Sha1};

/// Computes the hex digest of a file's content.
#[cfg_attr(test, mockall::automock)]
pub trait DigestCalculator: Send + Sync {
    /// The digest, or `None` if the file could not be read.
    fn calculate(&self, file: &File) -> Option<String>;
}

/// SHA-1, the digest Maven repositories publish in `.sha1` files.
pub struct Sha1Calculator {
    fs: Arc<dyn FileSystem>,
}

impl Sha1Calculator {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl DigestCalculator for Sha1Calculator {
    fn calculate(&self, file: &File) -> Option<String> {
        let Some(bytes) = self.fs.read_bytes(file) else {
            debug!("[digest] {} is unreadable", file);
            return None;
        };
        Some(sha1_hex(&bytes))
    }
}

/// Lowercase hex SHA-1 of `bytes`, two characters per byte.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let digest = Sha1::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
#[path = "digest_tests.rs"]
mod tests;
