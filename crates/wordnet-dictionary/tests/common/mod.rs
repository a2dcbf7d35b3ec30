#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const SOURCE_FILES: [&str; 6] = [
    "data.verb",
    "data.noun",
    "data.adv",
    "data.adj",
    "synonyms.txt",
    "related.txt",
];

pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy of the fixture files in a scratch directory, minus `skip`
pub fn scratch_copy(skip: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in SOURCE_FILES.iter().filter(|n| !skip.contains(*n)) {
        fs::copy(fixture_dir().join(name), dir.path().join(name)).unwrap();
    }
    dir
}
