use std::{
    fs::{self, read_dir},
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use log::{debug, warn};

use crate::{
    config::{BATCH_SIZE, IDLE_POLL_MS},
    error::RootAccessFailure,
    record::File,
};

/// Shared state of one walk.
struct WalkState {
    root: Arc<Path>,
    /// Directories queued or being scanned.
    pending: AtomicUsize,
    /// Set once any directory could not be read; the walk is then abandoned.
    failed: AtomicBool,
}

/// What a directory entry turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Dir(PathBuf),
    File(PathBuf),
    Skip,
}

/// Multi-threaded recursive listing of all regular files under `root`.
///
/// Directories are scanned concurrently by `num_threads` workers sharing a
/// work queue; files are batched before being sent back. Any unreadable
/// directory fails the whole walk. The result is sorted by path.
pub fn walk_parallel(root: &Path, num_threads: usize) -> Result<Vec<File>, RootAccessFailure> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            warn!("[walk] root {:?} is not a directory", root);
            return Err(RootAccessFailure::new(root));
        }
        Err(e) => {
            warn!("[walk] root {:?} cannot be accessed: {e}", root);
            return Err(RootAccessFailure::new(root));
        }
    }

    let state = WalkState {
        root: Arc::from(root),
        pending: AtomicUsize::new(1),
        failed: AtomicBool::new(false),
    };

    let (work_tx, work_rx) = channel::unbounded::<PathBuf>();
    let (file_tx, file_rx) = channel::unbounded::<Vec<File>>();

    let _ = work_tx.send(root.to_path_buf());

    let num_threads = num_threads.max(1);
    debug!("[walk_parallel] walking {:?} with {} threads", root, num_threads);

    thread::scope(|s| {
        for _ in 0..num_threads {
            let work_rx = work_rx.clone();
            let work_tx = work_tx.clone();
            let file_tx = file_tx.clone();
            let state = &state;

            s.spawn(move || worker_loop(work_rx, work_tx, file_tx, state));
        }
    });

    drop(file_tx);

    if state.failed.load(Ordering::Acquire) {
        return Err(RootAccessFailure::new(root));
    }

    let mut files: Vec<File> = file_rx.try_iter().flatten().collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    debug!("[walk_parallel] found {} files under {:?}", files.len(), root);
    Ok(files)
}

/// Each worker takes directories from the queue, pushes subdirectories back
/// and sends batched files.
fn worker_loop(
    work_rx: channel::Receiver<PathBuf>,
    work_tx: Sender<PathBuf>,
    file_tx: Sender<Vec<File>>,
    state: &WalkState,
) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    loop {
        if state.failed.load(Ordering::Acquire) {
            break;
        }

        match work_rx.recv_timeout(Duration::from_millis(IDLE_POLL_MS)) {
            Ok(dir) => {
                if !scan_dir(&dir, &work_tx, &mut batch, state) {
                    state.failed.store(true, Ordering::Release);
                }

                if batch.len() >= BATCH_SIZE {
                    let to_send = std::mem::take(&mut batch);
                    if file_tx.send(to_send).is_err() {
                        return;
                    }
                }

                if state.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
                    // Last directory, nothing else can be queued.
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if state.pending.load(Ordering::Acquire) == 0 {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if !batch.is_empty() {
        let _ = file_tx.send(batch);
    }
}

/// Scan one directory. Returns `false` if it or one of its entries could
/// not be read.
fn scan_dir(
    dir: &Path,
    work_tx: &Sender<PathBuf>,
    batch: &mut Vec<File>,
    state: &WalkState,
) -> bool {
    let rd = match read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("[walk] read_dir({:?}) failed: {e}", dir);
            return false;
        }
    };

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[walk] error reading entry in {:?}: {e}", dir);
                return false;
            }
        };

        match inspect_entry(&entry) {
            Ok(Entry::Dir(path)) => {
                state.pending.fetch_add(1, Ordering::AcqRel);
                let _ = work_tx.send(path);
            }
            Ok(Entry::File(path)) => batch.push(File::new(path, Arc::clone(&state.root))),
            Ok(Entry::Skip) => {}
            Err(e) => {
                warn!("[walk] cannot inspect {:?}: {e}", entry.path());
                return false;
            }
        }
    }

    true
}

/// Classify an entry. Symlinks count as files when they point at a regular
/// file; symlinked directories are never followed.
fn inspect_entry(entry: &fs::DirEntry) -> std::io::Result<Entry> {
    let file_type = entry.file_type()?;
    let path = entry.path();

    if file_type.is_dir() {
        return Ok(Entry::Dir(path));
    }
    if file_type.is_file() {
        return Ok(Entry::File(path));
    }
    if file_type.is_symlink() {
        return Ok(match fs::metadata(&path) {
            Ok(target) if target.is_file() => Entry::File(path),
            _ => Entry::Skip,
        });
    }

    Ok(Entry::Skip)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
