use crate::utils::error::{Result, ViewError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_view_name(field_name: &str, view_name: &str) -> Result<()> {
    if view_name.is_empty() {
        return Err(ViewError::ValidationError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if view_name.contains('\0') {
        return Err(ViewError::ValidationError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    if view_name.starts_with('/') {
        return Err(ViewError::ValidationError {
            message: format!("{} must be relative, got '{}'", field_name, view_name),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ViewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ViewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The Normal category uses the empty prefix; a configured non-empty prefix
/// must end with '/' so that prefix + view name stays a valid relative path.
pub fn validate_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }

    if !prefix.ends_with('/') {
        return Err(ViewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix must end with '/'".to_string(),
        });
    }

    if prefix.starts_with('/') {
        return Err(ViewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix must be relative".to_string(),
        });
    }

    Ok(())
}

/// The encoding is a pass-through value forwarded to the rendering engine;
/// only UTF-8 output is produced.
pub fn validate_encoding(field_name: &str, encoding: &str) -> Result<()> {
    if encoding.eq_ignore_ascii_case("utf-8") || encoding.eq_ignore_ascii_case("utf8") {
        return Ok(());
    }

    Err(ViewError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: encoding.to_string(),
        reason: "Unsupported encoding, only UTF-8 is available".to_string(),
    })
}
