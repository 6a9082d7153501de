use std::{
    io::{self, Write},
    path::Path,
};

use msv_fs::{File, FileList, RemovalFailure};

/// Where user-facing output goes: messages to stdout, errors to stderr.
pub trait Console {
    fn print_message(&mut self, message: &str) -> io::Result<()>;

    fn print_error(&mut self, error: &str) -> io::Result<()>;
}

/// Console over a pair of writers.
pub struct StdConsole<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> StdConsole<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }
}

impl StdConsole<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> Console for StdConsole<W, E> {
    fn print_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    fn print_error(&mut self, error: &str) -> io::Result<()> {
        writeln!(self.err, "{error}")
    }
}

/// Buffering console for testing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferedConsole {
    pub messages: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
impl Console for BufferedConsole {
    fn print_message(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_owned());
        Ok(())
    }

    fn print_error(&mut self, error: &str) -> io::Result<()> {
        self.errors.push(error.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One sentence per event.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Renders validation events onto a [`Console`].
pub struct ReportPrinter<C: Console> {
    console: C,
    format: OutputFormat,
}

impl<C: Console> ReportPrinter<C> {
    pub fn new(console: C, format: OutputFormat) -> Self {
        Self { console, format }
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn invalid_file(&mut self, file: &File) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Human => format!("Invalid file detected: {file}"),
            OutputFormat::Json => serde_json::json!({
                "kind": "invalid",
                "path": file.path().to_string_lossy(),
                "relative_path": file.relative_path(),
            })
            .to_string(),
        };
        self.console.print_message(&line)
    }

    pub fn root_inaccessible(&mut self, root: &Path) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Human => {
                format!("The given directory '{}' cannot be accessed.", root.display())
            }
            OutputFormat::Json => serde_json::json!({
                "kind": "error",
                "error": "root_inaccessible",
                "path": root.to_string_lossy(),
            })
            .to_string(),
        };
        self.console.print_error(&line)
    }

    pub fn removal_failed(&mut self, failure: &RemovalFailure) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Human => format!(
                "Following files could not be removed: {}",
                FileList(failure.files())
            ),
            OutputFormat::Json => serde_json::json!({
                "kind": "error",
                "error": "not_removed",
                "paths": failure
                    .files()
                    .iter()
                    .map(|f| f.path().to_string_lossy().into_owned())
                    .collect::<Vec<_>>(),
            })
            .to_string(),
        };
        self.console.print_error(&line)
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
