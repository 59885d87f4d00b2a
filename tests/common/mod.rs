#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the filename-guard binary.
#[macro_export]
macro_rules! filename_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("filename-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty file at the given relative path.
    pub fn create_file(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
    }

    /// Creates several empty files.
    pub fn create_files(&self, relative_paths: &[&str]) {
        for path in relative_paths {
            self.create_file(path);
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a fixture entry.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file written into the fixture, e.g. a report.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// A Java-style test tree: two conforming files and two violators.
    pub fn create_java_test_tree(&self) {
        self.create_files(&[
            "src/test/java/SomeUnitTests.java",
            "src/test/java/DbIntegrationTests.java",
            "src/test/java/Helper.java",
            "src/test/java/util/test2.java",
            "src/main/java/App.java",
        ]);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Suffixes used by most integration tests.
pub const JAVA_SUFFIXES: &str = "UnitTests,IntegrationTests";
