use crate::domain::ports::ConfigProvider;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOOK_NAME: &str = "pre-commit_LH";
pub const DEFAULT_STAGING_DIR: &str = ".hooks";
pub const DEFAULT_HOOKS_DIR: &str = ".git/hooks";

/// Resolved paths for one installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPlan {
    pub hook_name: String,
    pub source: PathBuf,
    pub hooks_dir: PathBuf,
    pub destination: PathBuf,
}

impl HookPlan {
    /// Relative directories are joined onto `project_root`; absolute ones are kept.
    pub fn resolve<C: ConfigProvider + ?Sized>(config: &C, project_root: &Path) -> Self {
        let staging_dir = project_root.join(config.staging_dir());
        let hooks_dir = project_root.join(config.hooks_dir());

        Self {
            hook_name: config.hook_name().to_string(),
            source: staging_dir.join(config.hook_name()),
            destination: hooks_dir.join(config.hook_name()),
            hooks_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub destination: PathBuf,
    pub bytes_copied: u64,
    /// Final permission bits of the installed hook; `None` off unix.
    pub mode: Option<u32>,
}
