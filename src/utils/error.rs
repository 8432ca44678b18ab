use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Hook source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Hook source is not a regular file: {}", .path.display())]
    SourceNotAFile { path: PathBuf },

    #[error("Permission denied while trying to {operation} {}", .path.display())]
    PermissionDenied {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path component exists but is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Source and destination are the same file: {}", .path.display())]
    SameFile { path: PathBuf },

    #[error("Failed to {operation} {}: {source}", .path.display())]
    IoError {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Filesystem step an I/O error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    ReadSource,
    CreateDir,
    Copy,
    SetTimes,
    SetPermissions,
    ReadConfig,
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            FsOperation::ReadSource => "read hook source",
            FsOperation::CreateDir => "create hooks directory",
            FsOperation::Copy => "copy hook to",
            FsOperation::SetTimes => "preserve timestamps on",
            FsOperation::SetPermissions => "set permissions on",
            FsOperation::ReadConfig => "read config file",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Permission,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HookError {
    /// Wraps an `io::Error`, splitting permission failures out of the generic case.
    pub fn io(operation: FsOperation, path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => HookError::PermissionDenied {
                operation,
                path: path.to_path_buf(),
                source,
            },
            _ => HookError::IoError {
                operation,
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HookError::PermissionDenied { .. } => ErrorCategory::Permission,
            HookError::ConfigValidationError { .. } | HookError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            _ => ErrorCategory::Filesystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Filesystem => ErrorSeverity::High,
            ErrorCategory::Permission => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HookError::SourceNotFound { path } => {
                format!("Hook file {} does not exist", path.display())
            }
            HookError::PermissionDenied {
                operation, path, ..
            } => format!("Not allowed to {} {}", operation, path.display()),
            HookError::NotADirectory { path } => format!(
                "Cannot create the hooks directory because {} is a file",
                path.display()
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HookError::SourceNotFound { .. } => {
                "Run the installer from the project root, or pass --project-root"
            }
            HookError::SourceNotAFile { .. } => "Point the hook name at a file, not a directory",
            HookError::PermissionDenied { .. } => {
                "Check ownership and permissions of the hook source and hooks directory"
            }
            HookError::NotADirectory { .. } => {
                "Remove or rename the file blocking the hooks directory path"
            }
            HookError::SameFile { .. } => "Use different staging and hooks directories",
            HookError::IoError { .. } => "Check that the disk is writable and try again",
            HookError::ConfigValidationError { .. } | HookError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HookError>;
