use crate::domain::model::{DEFAULT_HOOKS_DIR, DEFAULT_HOOK_NAME, DEFAULT_STAGING_DIR};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FsOperation, HookError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default)]
    pub hook: HookSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookSection {
    /// File name shared by the staged source and the installed hook.
    pub name: String,
    pub staging_dir: String,
    pub hooks_dir: String,
}

impl Default for HookSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_HOOK_NAME.to_string(),
            staging_dir: DEFAULT_STAGING_DIR.to_string(),
            hooks_dir: DEFAULT_HOOKS_DIR.to_string(),
        }
    }
}

impl HookConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| HookError::io(FsOperation::ReadConfig, path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HookError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_file_name("hook.name", &self.hook.name)?;
        validation::validate_path("hook.staging_dir", &self.hook.staging_dir)?;
        validation::validate_path("hook.hooks_dir", &self.hook.hooks_dir)?;
        Ok(())
    }
}

impl ConfigProvider for HookConfig {
    fn hook_name(&self) -> &str {
        &self.hook.name
    }

    fn staging_dir(&self) -> &str {
        &self.hook.staging_dir
    }

    fn hooks_dir(&self) -> &str {
        &self.hook.hooks_dir
    }
}

impl Validate for HookConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_builtin_layout() {
        let config = HookConfig::default();

        assert_eq!(config.hook_name(), "pre-commit_LH");
        assert_eq!(config.staging_dir(), ".hooks");
        assert_eq!(config.hooks_dir(), ".git/hooks");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = HookConfig::from_toml_str("").unwrap();
        assert_eq!(config, HookConfig::default());
    }

    #[test]
    fn test_partial_hook_table() {
        let toml_content = r#"
[hook]
name = "pre-push"
"#;

        let config = HookConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.hook_name(), "pre-push");
        assert_eq!(config.staging_dir(), ".hooks");
        assert_eq!(config.hooks_dir(), ".git/hooks");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = HookConfig::from_toml_str("[hook\nname = 1").unwrap_err();
        assert!(matches!(err, HookError::ConfigValidationError { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[hook]
name = "nested/pre-commit"
"#;

        let config = HookConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[hook]
name = "commit-msg"
staging_dir = "scripts/git-hooks"
hooks_dir = ".git/hooks"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = HookConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.hook_name(), "commit-msg");
        assert_eq!(config.staging_dir(), "scripts/git-hooks");
    }

    #[test]
    fn test_missing_config_file() {
        let err = HookConfig::from_file("/nonexistent/hooks.toml").unwrap_err();
        assert!(matches!(
            err,
            HookError::IoError {
                operation: FsOperation::ReadConfig,
                ..
            }
        ));
    }
}
