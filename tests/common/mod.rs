#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the header-inc binary.
#[macro_export]
macro_rules! header_inc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("header-inc"))
    };
}

/// Creates a temporary source tree for integration tests.
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

    /// Creates a fixture holding `a/x.h`, `a/b/y.h` and `a/z.txt`.
    pub fn sample_tree() -> Self {
        let fixture = Self::new();
        fixture.create_file("a/x.h", "#pragma once\n");
        fixture.create_file("a/b/y.h", "#pragma once\n");
        fixture.create_file("a/z.txt", "notes\n");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default listing file.
    pub fn default_output(&self) -> PathBuf {
        self.dir.path().join("test").join("header.inc")
    }

    /// Reads the default listing file.
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.default_output()).expect("Failed to read output")
    }

    /// Listing lines, in file order.
    pub fn output_lines(&self) -> Vec<String> {
        self.read_output().lines().map(str::to_string).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
