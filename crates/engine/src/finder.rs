use std::{path::Path, sync::Arc, thread, time::Instant};

use crossbeam::channel;
use log::{debug, info};
use msv_fs::{File, FileSystem, IgnorePrefixes, RootAccessFailure};
use msv_runtime::RELEVANT_EXTENSIONS;

use crate::{digest::DigestCalculator, extract::DigestExtractor};

/// Lists the artifacts of a repository whose checksum does not verify.
pub struct InvalidFileFinder {
    fs: Arc<dyn FileSystem>,
    calculator: Arc<dyn DigestCalculator>,
    extractor: Arc<dyn DigestExtractor>,
    workers: usize,
}

impl InvalidFileFinder {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        calculator: Arc<dyn DigestCalculator>,
        extractor: Arc<dyn DigestExtractor>,
        workers: usize,
    ) -> Self {
        Self {
            fs,
            calculator,
            extractor,
            workers: workers.max(1),
        }
    }

    /// Every `.pom`/`.jar` under `root`, outside the ignored prefixes, that
    /// fails verification, in listing order.
    ///
    /// Fails without checking any file if `root` cannot be listed.
    pub fn list_invalid_files(
        &self,
        root: &Path,
        ignore: &IgnorePrefixes,
    ) -> Result<Vec<File>, RootAccessFailure> {
        let start = Instant::now();
        let files = self.fs.list_files(root)?;
        let listed = files.len();

        let candidates: Vec<File> = files
            .into_iter()
            .filter(is_relevant_for_validation)
            .filter(|f| !ignore.is_ignored(f))
            .collect();
        let checked = candidates.len();

        let invalid = self.collect_invalid(candidates);

        info!(
            "[finder] {} files listed, {} checked, {} invalid in {:.2}ms",
            listed,
            checked,
            invalid.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(invalid)
    }

    /// Check candidates on a pool of scoped workers and keep the invalid ones
    /// in their original order.
    fn collect_invalid(&self, candidates: Vec<File>) -> Vec<File> {
        if candidates.is_empty() {
            return candidates;
        }

        let workers = self.workers.min(candidates.len());
        let (work_tx, work_rx) = channel::unbounded::<usize>();
        let (invalid_tx, invalid_rx) = channel::unbounded::<usize>();

        for idx in 0..candidates.len() {
            let _ = work_tx.send(idx);
        }
        drop(work_tx);

        debug!(
            "[finder] checking {} files with {} workers",
            candidates.len(),
            workers
        );

        thread::scope(|s| {
            for _ in 0..workers {
                let work_rx = work_rx.clone();
                let invalid_tx = invalid_tx.clone();
                let candidates = &candidates;

                s.spawn(move || {
                    for idx in work_rx.iter() {
                        if self.is_invalid(&candidates[idx]) {
                            let _ = invalid_tx.send(idx);
                        }
                    }
                });
            }
        });
        drop(invalid_tx);

        let mut invalid = vec![false; candidates.len()];
        for idx in invalid_rx.try_iter() {
            invalid[idx] = true;
        }

        candidates
            .into_iter()
            .zip(invalid)
            .filter_map(|(file, is_invalid)| is_invalid.then_some(file))
            .collect()
    }

    /// Invalid when the digests differ, ignoring case, or when either one is
    /// missing.
    fn is_invalid(&self, file: &File) -> bool {
        let expected = self.extractor.extract(file);
        let actual = self.calculator.calculate(file);

        match (expected, actual) {
            (Some(expected), Some(actual)) => {
                let mismatch = !expected.eq_ignore_ascii_case(&actual);
                if mismatch {
                    debug!(
                        "[finder] {} expected {} but is {}",
                        file, expected, actual
                    );
                }
                mismatch
            }
            _ => {
                debug!("[finder] {} cannot be verified", file);
                true
            }
        }
    }
}

/// Only artifacts carry checksums; metadata, lock files and the checksum
/// files themselves are skipped.
pub fn is_relevant_for_validation(file: &File) -> bool {
    RELEVANT_EXTENSIONS
        .iter()
        .any(|ext| file.has_extension_ignore_case(ext))
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
