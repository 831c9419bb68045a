//! Skill file discovery
//!
//! Each immediate child directory of the skills root is a skill. A skill is
//! only considered when it contains the skill file (`SKILL.md` by default).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{self, Result};

/// List `<root>/<dir>/<skill_file>` for every child directory that has one,
/// sorted by directory name.
pub fn discover_skill_files(root: &Path, skill_file: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(error::fs::dir_read_failed(root, "not a directory"));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Dangling symlink next to the skills, not a skill itself
            Err(e)
                if e.depth() > 0
                    && e.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound) =>
            {
                continue;
            }
            Err(e) => return Err(error::fs::dir_read_failed(root, e)),
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let candidate = entry.path().join(skill_file);
        if candidate.is_file() {
            files.push(candidate);
        }
    }

    Ok(files)
}

/// Display name of a skill: its directory name
pub fn skill_name(skill_file: &Path) -> String {
    skill_file
        .parent()
        .and_then(Path::file_name)
        .map_or_else(
            || skill_file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
