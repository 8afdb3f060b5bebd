#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the mc-instance-checker binary.
#[macro_export]
macro_rules! checker {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mc-instance-checker"));
        cmd.env_remove("RUST_LOG");
        cmd
    }};
}

/// A well-formed plain model counting instance named `name`.
pub fn clean_instance(name: &str) -> String {
    format!("c t mc\nc file {name}\np cnf 3 2\n1 -2 0\n2 3 0\n")
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

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a well-formed instance whose `c file` tag matches its name.
    pub fn create_clean_instance(&self, relative_path: &str) {
        let name = Path::new(relative_path)
            .file_name()
            .and_then(|n| n.to_str())
            .expect("instance path has a file name");
        self.create_file(relative_path, &clean_instance(name));
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the path of a file inside the temp directory.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// Creates a local config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".mc-instance-checker.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
