//! Common test utilities for skillfix integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Frontmatter carrying both non-standard fields
#[allow(dead_code)]
pub const DIRTY_SKILL: &str = concat!(
    "---\n",
    "name: pdf\n",
    "description: Work with PDF files\n",
    "license: Complete terms in LICENSE.txt\n",
    "metadata:\n",
    "  author: someone\n",
    "  version: \"1.0\"\n",
    "allowed-tools: Read, Write\n",
    "---\n",
    "\n",
    "# PDF\n",
    "\n",
    "license: this line is body text\n",
);

/// DIRTY_SKILL after fixing
#[allow(dead_code)]
pub const FIXED_SKILL: &str = concat!(
    "---\n",
    "name: pdf\n",
    "description: Work with PDF files\n",
    "allowed-tools: Read, Write\n",
    "---\n",
    "\n",
    "# PDF\n",
    "\n",
    "license: this line is body text\n",
);

#[allow(dead_code)]
pub const CLEAN_SKILL: &str = "---\nname: docx\ndescription: Word documents\n---\n# DOCX\n";

#[allow(dead_code)]
pub const UNTERMINATED_SKILL: &str = "---\nname: broken\nlicense: MIT\n# never closed\n";

/// A temporary directory holding a skills tree
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Default skills directory inside the workspace
    pub fn skills_dir(&self) -> PathBuf {
        self.path.join("skills")
    }

    /// Write `skills/<name>/SKILL.md`
    pub fn write_skill(&self, name: &str, content: &str) {
        self.write_file(&format!("skills/{name}/SKILL.md"), content);
    }

    /// Read `skills/<name>/SKILL.md`
    pub fn read_skill(&self, name: &str) -> String {
        self.read_file(&format!("skills/{name}/SKILL.md"))
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the skillfix binary, run from `dir`
#[allow(deprecated, dead_code)]
pub fn skillfix_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skillfix").expect("skillfix binary should be built");
    cmd.current_dir(dir);
    cmd
}
