// Harness configuration, read from TOML. Every field is optional in the file;
// command-line flags override whatever the file sets.
//
//   splits = ["train", "test", "arc-gen"]
//   max_tasks = 40
//   show_failures = true

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{ArcError, Result};
use crate::perception::task::Split;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Splits scored by `score` and `bench`.
    pub splits: Vec<Split>,
    /// Stop after this many registered tasks.
    pub max_tasks: Option<usize>,
    /// Print per-task detail, not just the summary.
    pub show_failures: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            splits: Split::ALL.to_vec(),
            max_tasks: None,
            show_failures: false,
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.splits.is_empty() {
            return Err(ArcError::InvalidConfig("splits must not be empty".into()));
        }
        for (i, s) in self.splits.iter().enumerate() {
            if self.splits[..i].contains(s) {
                return Err(ArcError::InvalidConfig(format!("split {} listed twice", s)));
            }
        }
        if self.max_tasks == Some(0) {
            return Err(ArcError::InvalidConfig("max_tasks must be > 0".into()));
        }
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: HarnessConfig = toml::from_str(contents).map_err(|e| ArcError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg = Self::from_toml(&contents).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(HarnessConfig::from_toml("").unwrap(), HarnessConfig::default());
    }

    #[test]
    fn partial_file() {
        let cfg = HarnessConfig::from_toml("splits = [\"train\", \"arc_gen\"]\nmax_tasks = 5\n").unwrap();
        assert_eq!(cfg.splits, vec![Split::Train, Split::ArcGen]);
        assert_eq!(cfg.max_tasks, Some(5));
        assert!(!cfg.show_failures);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(HarnessConfig::from_toml("splits = []"), Err(ArcError::InvalidConfig(_))));
        assert!(HarnessConfig::from_toml("max_tasks = 0").is_err());
        assert!(HarnessConfig::from_toml("splits = [\"dev\"]").is_err());
        assert!(HarnessConfig::from_toml("splits = [\"test\", \"test\"]").is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("harness.toml");
        fs::write(&path, "show_failures = true\n").expect("write");
        let cfg = HarnessConfig::from_file(&path).expect("load");
        assert!(cfg.show_failures);
        assert!(HarnessConfig::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
