//! [`FilterDir`]: a temporary directory holding filter files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A filter file used across the test suites
pub const SAMPLE_TOML: &str = r#"[[filter]]
query = "list:coreos-dev@googlegroups.com"
label = "Mailing Lists/coreos-dev"
archiveUnlessToMe = true

[[filter]]
queryOr = ["to:plans@tripit.com", "to:receipts@expensify.com"]
delete = true

[[filter]]
query = "from:notifications@github.com"
label = "GitHub"
archive = true
read = true
"#;

/// Temporary directory for filter files; removed on drop
pub struct FilterDir {
    temp_dir: TempDir,
}

impl Default for FilterDir {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `name` inside the directory, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `name` back as text.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    /// Write [`SAMPLE_TOML`] to `filters.toml` and return its path.
    pub fn sample(&self) -> PathBuf {
        self.write("filters.toml", SAMPLE_TOML)
    }
}
