use super::*;

use crate::mocks::MockFs;
use std::{path::Path, sync::Arc};

const DIGEST: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

fn pom() -> File {
    File::new("repo/g/commons-logging-1.0.4.pom", Path::new("repo"))
}

#[test]
fn parse_sidecar_cases() {
    let cases: &[(&str, &str)] = &[
        (DIGEST, DIGEST),
        ("a9993e364706816aba3e25717850c26c9cd0d89d\n", DIGEST),
        ("a9993e364706816aba3e25717850c26c9cd0d89d\r\n", DIGEST),
        ("a9993e364706816aba3e25717850c26c9cd0d89d  a.pom", DIGEST),
        ("a9993e364706816aba3e25717850c26c9cd0d89d  /some/path/a.pom\n", DIGEST),
        ("A9993E364706816ABA3E25717850C26C9CD0D89D", "A9993E364706816ABA3E25717850C26C9CD0D89D"),
        ("not-hex-at-all", "not-hex-at-all"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_sidecar(input), *expected, "input {input:?}");
    }
}

#[test]
fn sidecar_name_appends_extension() {
    assert_eq!(sidecar_name(&pom()), "commons-logging-1.0.4.pom.sha1");
}

#[test]
fn extract_reads_sibling_checksum_file() {
    let mut fs = MockFs::new();
    fs.expect_sibling_file()
        .withf(|f, name| {
            f.path() == Path::new("repo/g/commons-logging-1.0.4.pom")
                && name == "commons-logging-1.0.4.pom.sha1"
        })
        .times(1)
        .returning(|f, name| Some(File::new(f.path().with_file_name(name), f.root_handle())));
    fs.expect_read_text()
        .withf(|f| f.path() == Path::new("repo/g/commons-logging-1.0.4.pom.sha1"))
        .times(1)
        .returning(|_| Some(format!("{DIGEST}  commons-logging-1.0.4.pom")));

    let extractor = SidecarExtractor::new(Arc::new(fs));

    assert_eq!(extractor.extract(&pom()).as_deref(), Some(DIGEST));
}

#[test]
fn extract_without_sidecar_is_none_and_reads_nothing() {
    let mut fs = MockFs::new();
    fs.expect_sibling_file().returning(|_, _| None);
    fs.expect_read_text().never();

    let extractor = SidecarExtractor::new(Arc::new(fs));

    assert!(extractor.extract(&pom()).is_none());
}

#[test]
fn extract_with_unreadable_sidecar_is_none() {
    let mut fs = MockFs::new();
    fs.expect_sibling_file()
        .returning(|f, name| Some(File::new(f.path().with_file_name(name), f.root_handle())));
    fs.expect_read_text().returning(|_| None);

    let extractor = SidecarExtractor::new(Arc::new(fs));

    assert!(extractor.extract(&pom()).is_none());
}
