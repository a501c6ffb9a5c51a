use crate::utils::error::{PrintError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrintError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PrintError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_exists(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !Path::new(path).is_file() {
        return Err(PrintError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        let err = validate_path("config", "").unwrap_err();
        assert!(err.to_string().contains("Path cannot be empty"));
    }

    #[test]
    fn nul_byte_is_rejected() {
        assert!(validate_path("config", "a\0b").is_err());
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = validate_file_exists("config", missing.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn existing_file_passes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_file_exists("config", file.path().to_str().unwrap()).is_ok());
    }
}
