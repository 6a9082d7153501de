use std::{num::NonZeroUsize, path::PathBuf, thread};

pub const PROGRAM_NAME: &str = "msv";
pub const PROGRAM_LOG_LEVEL: &str = "MSV_LOG_LEVEL";
/// Overrides the number of worker threads used for walking and validating.
pub const WORKERS_ENV: &str = "MSV_WORKERS";

/// Extension appended to an artifact's file name to locate its checksum file.
pub const SIDECAR_EXTENSION: &str = "sha1";

/// Extensions (compared case-insensitively) of files that carry a checksum.
pub const RELEVANT_EXTENSIONS: &[&str] = &["pom", "jar"];

const FALLBACK_WORKERS: usize = 4;

fn home_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
    #[cfg(windows)]
    {
        std::env::var_os("USERPROFILE")
            .map(PathBuf::from)
            .or_else(|| {
                let drive = std::env::var_os("HOMEDRIVE")?;
                let path = std::env::var_os("HOMEPATH")?;
                Some(PathBuf::from(drive).join(path))
            })
            .or_else(dirs::home_dir)
    }
    #[cfg(not(any(unix, windows)))]
    {
        dirs::home_dir()
    }
}

/// Local Maven repository used when no repository is given on the command line.
pub fn default_repository_path() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".m2")
        .join("repository")
}

/// Worker count: `MSV_WORKERS` if it is a positive integer, otherwise the
/// available parallelism of the host.
pub fn default_worker_count() -> usize {
    std::env::var(WORKERS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<NonZeroUsize>().ok())
        .or_else(|| thread::available_parallelism().ok())
        .map(NonZeroUsize::get)
        .unwrap_or(FALLBACK_WORKERS)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
