use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use log::{error, info};
use msv_engine::{InvalidFileFinder, Remover, Sha1Calculator, SidecarExtractor};
use msv_fs::{FileSystem, IgnorePrefixes, RealFileSystem};
use msv_runtime::{default_repository_path, default_worker_count};

use crate::printer::{Console, OutputFormat, ReportPrinter, StdConsole};

/// Everything one validation run needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct ValidateRequest {
    /// Defaults to the local Maven repository.
    pub repository: Option<PathBuf>,
    pub remove: bool,
    pub ignore: Vec<String>,
    pub workers: Option<usize>,
    pub format: OutputFormat,
}

/// How a run ended; each variant has its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Listing (and removal, if requested) completed. Invalid files may have
    /// been reported.
    Completed,
    RootInaccessible,
    RemovalFailed,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::RootInaccessible => 1,
            Outcome::RemovalFailed => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Exit code when output could not be written.
const OUTPUT_FAILURE: u8 = 3;

/// Finder and remover sharing one storage backend.
pub struct Pipeline {
    pub finder: InvalidFileFinder,
    pub remover: Remover,
}

impl Pipeline {
    pub fn new(fs: Arc<dyn FileSystem>, workers: usize) -> Self {
        let calculator = Arc::new(Sha1Calculator::new(Arc::clone(&fs)));
        let extractor = Arc::new(SidecarExtractor::new(Arc::clone(&fs)));

        Pipeline {
            finder: InvalidFileFinder::new(Arc::clone(&fs), calculator, extractor, workers),
            remover: Remover::new(fs),
        }
    }

    /// Pipeline on the local disk.
    pub fn real(workers: usize) -> Self {
        Self::new(Arc::new(RealFileSystem::new(workers)), workers)
    }
}

pub fn run(request: ValidateRequest) -> ExitCode {
    let workers = request.workers.unwrap_or_else(default_worker_count);
    let pipeline = Pipeline::real(workers);
    let mut printer = ReportPrinter::new(StdConsole::stdout(), request.format);

    match execute(&pipeline, &mut printer, &request) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("[validate] {e:#}");
            ExitCode::from(OUTPUT_FAILURE)
        }
    }
}

/// List invalid files, print each, and remove them if requested.
pub fn execute<C: Console>(
    pipeline: &Pipeline,
    printer: &mut ReportPrinter<C>,
    request: &ValidateRequest,
) -> Result<Outcome> {
    let root = request
        .repository
        .clone()
        .unwrap_or_else(default_repository_path);
    let ignore = IgnorePrefixes::new(request.ignore.iter().cloned());

    info!("[validate] validating {}", root.display());

    let invalid_files = match pipeline.finder.list_invalid_files(&root, &ignore) {
        Ok(files) => files,
        Err(e) => {
            info!("[validate] {e}");
            printer
                .root_inaccessible(&root)
                .context("failed to report inaccessible root")?;
            return Ok(Outcome::RootInaccessible);
        }
    };

    for file in &invalid_files {
        printer
            .invalid_file(file)
            .context("failed to report invalid file")?;
    }

    if request.remove
        && let Some(failure) = pipeline.remover.remove(&invalid_files)
    {
        printer
            .removal_failed(&failure)
            .context("failed to report unremovable files")?;
        return Ok(Outcome::RemovalFailed);
    }

    Ok(Outcome::Completed)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
