//! Filesystem side of the validator: the [`File`] value type, the
//! [`FileSystem`] port the engine consumes and its real-disk adapter.

mod config;
mod error;
mod excludes;
mod port;
mod real;
mod record;
mod walker;

pub use error::{FileList, RemovalFailure, RootAccessFailure};
pub use excludes::IgnorePrefixes;
pub use port::FileSystem;
pub use real::RealFileSystem;
pub use record::File;
pub use walker::walk_parallel;
