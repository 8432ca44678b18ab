pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use self::toml_config::HookConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hook-installer")]
#[command(about = "Install the project's git commit hook into .git/hooks")]
pub struct CliConfig {
    /// Directory the staging and hooks paths are resolved against
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Optional TOML file overriding the hook name and directories
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Show what would be installed without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Built-in defaults unless `--config` names a file.
    pub fn hook_config(&self) -> Result<HookConfig> {
        match &self.config {
            Some(path) => HookConfig::from_file(path),
            None => Ok(HookConfig::default()),
        }
    }
}
