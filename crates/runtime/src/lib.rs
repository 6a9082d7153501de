mod config;
pub mod logging;

pub use config::{
    PROGRAM_LOG_LEVEL, PROGRAM_NAME, RELEVANT_EXTENSIONS, SIDECAR_EXTENSION, WORKERS_ENV,
    default_repository_path, default_worker_count,
};

pub use logging::init;
