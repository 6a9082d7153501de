use super::*;

use std::{fs, path::Path};

use msv_engine::sha1_hex;
use msv_fs::{File, RemovalFailure, RootAccessFailure};

use crate::printer::BufferedConsole;

/// Real disk, but deleting always fails.
struct UndeletableFs(RealFileSystem);

impl FileSystem for UndeletableFs {
    fn list_files(&self, root: &Path) -> Result<Vec<File>, RootAccessFailure> {
        self.0.list_files(root)
    }

    fn read_bytes(&self, file: &File) -> Option<Vec<u8>> {
        self.0.read_bytes(file)
    }

    fn read_text(&self, file: &File) -> Option<String> {
        self.0.read_text(file)
    }

    fn sibling_file(&self, file: &File, name: &str) -> Option<File> {
        self.0.sibling_file(file, name)
    }

    fn remove_files(&self, files: &[File]) -> Option<RemovalFailure> {
        RemovalFailure::new(files.to_vec())
    }
}

fn printer() -> ReportPrinter<BufferedConsole> {
    ReportPrinter::new(BufferedConsole::default(), OutputFormat::Human)
}

fn request(root: &Path, remove: bool) -> ValidateRequest {
    ValidateRequest {
        repository: Some(root.to_path_buf()),
        remove,
        ..ValidateRequest::default()
    }
}

/// Repository with one valid pom and one jar without checksum file.
fn repository() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path().join("org/example/lib/1.0");
    fs::create_dir_all(&dir).expect("create dirs");
    fs::write(dir.join("lib-1.0.pom"), b"<project/>").expect("write pom");
    fs::write(dir.join("lib-1.0.pom.sha1"), sha1_hex(b"<project/>")).expect("write sha1");
    let jar = dir.join("lib-1.0.jar");
    fs::write(&jar, b"PK").expect("write jar");
    (tmp, jar)
}

#[test]
fn outcome_exit_codes_are_distinct() {
    assert_eq!(Outcome::Completed.code(), 0);
    assert_eq!(Outcome::RootInaccessible.code(), 1);
    assert_eq!(Outcome::RemovalFailed.code(), 2);
}

#[test]
fn only_prints_without_remove() {
    let (tmp, jar) = repository();
    let mut printer = printer();

    let outcome = execute(&Pipeline::real(2), &mut printer, &request(tmp.path(), false))
        .expect("output works");

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        printer.console().messages,
        vec![format!("Invalid file detected: {}", jar.display())]
    );
    assert!(printer.console().errors.is_empty());
    assert!(jar.exists(), "nothing is removed without --remove");
}

#[test]
fn prints_and_removes() {
    let (tmp, jar) = repository();
    let mut printer = printer();

    let outcome = execute(&Pipeline::real(2), &mut printer, &request(tmp.path(), true))
        .expect("output works");

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(printer.console().messages.len(), 1);
    assert!(printer.console().errors.is_empty());
    assert!(!jar.exists());
    assert!(jar.with_file_name("lib-1.0.pom").exists(), "valid files stay");
}

#[test]
fn stops_when_root_cannot_be_accessed() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("repository");
    let mut printer = printer();

    let outcome = execute(&Pipeline::real(2), &mut printer, &request(&missing, true))
        .expect("output works");

    assert_eq!(outcome, Outcome::RootInaccessible);
    assert!(printer.console().messages.is_empty());
    assert_eq!(
        printer.console().errors,
        vec![format!(
            "The given directory '{}' cannot be accessed.",
            missing.display()
        )]
    );
}

#[test]
fn reports_files_that_cannot_be_removed() {
    let (tmp, jar) = repository();
    let pipeline = Pipeline::new(Arc::new(UndeletableFs(RealFileSystem::new(2))), 2);
    let mut printer = printer();

    let outcome = execute(&pipeline, &mut printer, &request(tmp.path(), true))
        .expect("output works");

    assert_eq!(outcome, Outcome::RemovalFailed);
    assert_eq!(
        printer.console().messages,
        vec![format!("Invalid file detected: {}", jar.display())]
    );
    assert_eq!(
        printer.console().errors,
        vec![format!(
            "Following files could not be removed: [{}]",
            jar.display()
        )]
    );
}

#[test]
fn ignored_prefixes_are_passed_through() {
    let (tmp, jar) = repository();
    let mut printer = printer();
    let request = ValidateRequest {
        ignore: vec![String::from("org/example/")],
        ..request(tmp.path(), true)
    };

    let outcome = execute(&Pipeline::real(2), &mut printer, &request).expect("output works");

    assert_eq!(outcome, Outcome::Completed);
    assert!(printer.console().messages.is_empty());
    assert!(jar.exists());
}

#[test]
fn clean_repository_prints_nothing() {
    let (tmp, jar) = repository();
    fs::write(jar.with_file_name("lib-1.0.jar.sha1"), format!("{}  lib-1.0.jar\n", sha1_hex(b"PK")))
        .expect("write sha1");
    let mut printer = printer();

    let outcome = execute(&Pipeline::real(2), &mut printer, &request(tmp.path(), true))
        .expect("output works");

    assert_eq!(outcome, Outcome::Completed);
    assert!(printer.console().messages.is_empty());
    assert!(printer.console().errors.is_empty());
}
