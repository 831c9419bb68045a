//! Configuration for the frontmatter fixer
//!
//! An optional `skillfix.yaml` overrides the skill file name and the list of
//! frontmatter fields to strip:
//!
//! ```yaml
//! skill_file: SKILL.md
//! deny:
//!   - key: license
//!   - key: metadata
//!     children: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Config filename looked up in the skills root
pub const CONFIG_FILE: &str = "skillfix.yaml";

/// Skill definition filename inside each skill directory
pub const DEFAULT_SKILL_FILE: &str = "SKILL.md";

/// A top-level frontmatter field that is stripped from skill files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeniedField {
    /// Field name, matched as `<key>:` at the start of a line
    pub key: String,

    /// Also drop the indented (and blank) lines nested under the field
    #[serde(default)]
    pub children: bool,
}

impl DeniedField {
    pub fn line(key: &str) -> Self {
        Self {
            key: key.to_string(),
            children: false,
        }
    }

    pub fn block(key: &str) -> Self {
        Self {
            key: key.to_string(),
            children: true,
        }
    }

    /// Whether `line` introduces this field
    pub fn matches(&self, line: &str) -> bool {
        line.strip_prefix(self.key.as_str())
            .is_some_and(|rest| rest.starts_with(':'))
    }
}

/// Fields stripped when no configuration says otherwise
pub fn default_deny() -> Vec<DeniedField> {
    vec![DeniedField::line("license"), DeniedField::block("metadata")]
}

fn default_skill_file() -> String {
    DEFAULT_SKILL_FILE.to_string()
}

/// Fixer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixerConfig {
    #[serde(default = "default_skill_file")]
    pub skill_file: String,

    #[serde(default = "default_deny")]
    pub deny: Vec<DeniedField>,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            skill_file: default_skill_file(),
            deny: default_deny(),
        }
    }
}

impl FixerConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| error::config::parse_failed(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `<root>/skillfix.yaml` is used
    /// when present, and the defaults when it is not.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content =
            fs::read_to_string(&path).map_err(|e| error::config::read_failed(&path, e))?;
        Self::from_yaml(&path, &content)
    }

    fn validate(&self) -> Result<()> {
        if self.skill_file.trim().is_empty() {
            return Err(error::config::invalid("skill_file must not be empty"));
        }
        if self.skill_file.contains(['/', '\\']) {
            return Err(error::config::invalid(format!(
                "skill_file must be a plain file name, got '{}'",
                self.skill_file
            )));
        }
        for field in &self.deny {
            if field.key.is_empty() {
                return Err(error::config::invalid("deny key must not be empty"));
            }
            if field.key.contains(':') || field.key.chars().any(char::is_whitespace) {
                return Err(error::config::invalid(format!(
                    "deny key '{}' must not contain ':' or whitespace",
                    field.key
                )));
            }
        }
        Ok(())
    }
}
