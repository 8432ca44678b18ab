use crate::utils::error::{HookError, Result};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A hook name must land directly inside the hooks directory.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    validate_path(field_name, value)?;

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(HookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a plain file name without directory parts".to_string(),
        }),
    }
}
