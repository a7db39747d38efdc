//! [`TestProject`] builder for filter-list build scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default source directory name.
pub const SOURCE_DIR: &str = "src";
/// Default output directory name.
pub const OUTPUT_DIR: &str = "filters";

/// A temporary project directory with helpers for sources, artifacts and
/// assertions.
///
/// # Example
///
/// ```rust,no_run
/// use filterlist_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_source("ads.txt", "||ads.example.com^\n");
/// project.assert_file_exists("src/ads.txt");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create a project with an empty `src/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(SOURCE_DIR)).unwrap();
        Self { temp_dir }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.root().join(SOURCE_DIR).join(file_name)
    }

    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.root().join(OUTPUT_DIR).join(file_name)
    }

    /// Write a rule source into `src/`.
    pub fn write_source(&self, file_name: &str, content: &str) {
        fs::write(self.source_path(file_name), content).unwrap();
    }

    /// Write an artifact into `filters/`, creating the directory.
    pub fn write_artifact(&self, file_name: &str, content: &str) {
        fs::create_dir_all(self.root().join(OUTPUT_DIR)).unwrap();
        fs::write(self.artifact_path(file_name), content).unwrap();
    }

    /// Write `filterlist.toml` in the project root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("filterlist.toml"), content).unwrap();
    }

    /// Read an artifact from `filters/`.
    ///
    /// # Panics
    /// Panics if the artifact cannot be read.
    pub fn read_artifact(&self, file_name: &str) -> String {
        let path = self.artifact_path(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read artifact: {}", path.display()))
    }

    /// Modification time of an artifact, for asserting that no write happened.
    pub fn artifact_modified(&self, file_name: &str) -> std::time::SystemTime {
        fs::metadata(self.artifact_path(file_name))
            .and_then(|m| m.modified())
            .unwrap()
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
