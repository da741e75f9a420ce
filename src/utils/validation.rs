use crate::utils::error::{LocatorError, Result};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(LocatorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(LocatorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LocatorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A marker is joined onto every visited directory, so it has to be a bare
/// file name.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    validate_path(field_name, Path::new(value))?;

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(LocatorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a single file name without directory separators".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("boundary", Path::new("/home/user/go")).is_ok());
        assert!(validate_path("boundary", Path::new("")).is_err());
        assert!(validate_path("boundary", Path::new("bad\0path")).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("marker_file", "go.mod").is_ok());
        assert!(validate_file_name("marker_file", "  ").is_err());
        assert!(validate_file_name("marker_file", "sub/go.mod").is_err());
        assert!(validate_file_name("marker_file", "..").is_err());
        assert!(validate_file_name("marker_file", "/go.mod").is_err());
    }
}
