use std::{num::NonZeroUsize, path::PathBuf, process::ExitCode};

use clap::Parser;

mod commands;
mod printer;

use commands::ValidateRequest;
use msv_runtime::logging;
use printer::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "msv",
    version,
    about = "Validates the SHA-1 checksum files of a Maven repository"
)]
pub struct Cli {
    /// Path to the repository that should be validated [default: ~/.m2/repository]
    #[arg(value_name = "REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Remove the invalid files
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// Ignore files whose path relative to the repository starts with PREFIX
    /// (may be given multiple times)
    #[arg(short = 'i', long = "ignore", value_name = "PREFIX")]
    pub ignore: Vec<String>,

    /// Number of worker threads [default: available parallelism]
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Output one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,
}

impl From<Cli> for ValidateRequest {
    fn from(cli: Cli) -> Self {
        ValidateRequest {
            repository: cli.repository,
            remove: cli.remove,
            ignore: cli.ignore,
            workers: cli.jobs.map(NonZeroUsize::get),
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::validate::run(cli.into())
}
