pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::HookConfig;
pub use crate::core::installer::HookInstaller;
pub use crate::domain::model::{HookPlan, InstallReport};
pub use crate::utils::error::{HookError, Result};
