use crate::utils::error::{PrintError, Result};
use crate::utils::validation::{validate_file_exists, Validate};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional overrides read from a TOML file.
///
/// ```toml
/// values = ["1", "2", "3"]
/// delimiter = ";"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub values: Option<Vec<String>>,
    pub delimiter: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PrintError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_str(&content).map_err(|e| match e {
            PrintError::TomlError(source) => PrintError::TomlFileError {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        tracing::debug!(
            has_values = config.values.is_some(),
            has_delimiter = config.delimiter.is_some(),
            "Parsed config file"
        );
        Ok(config)
    }
}

/// Path wrapper so the `--config` argument goes through the same `Validate` path as the rest.
pub struct ConfigPath<'a>(pub &'a str);

impl Validate for ConfigPath<'_> {
    fn validate(&self) -> Result<()> {
        validate_file_exists("config", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_both_keys() {
        let config = FileConfig::from_str("values = [\"a\", \"b\"]\ndelimiter = \"-\"\n").unwrap();
        assert_eq!(config.values, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(config.delimiter.as_deref(), Some("-"));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(FileConfig::from_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = FileConfig::from_str("separator = \",\"").unwrap_err();
        assert!(matches!(err, PrintError::TomlError(_)));
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "delimiter = \", \"").unwrap();
        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.delimiter.as_deref(), Some(", "));
        assert_eq!(config.values, None);
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "delimiter = ").unwrap();
        let err = FileConfig::from_file(file.path()).unwrap_err();

        assert!(matches!(err, PrintError::TomlFileError { .. }));
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FileConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, PrintError::ConfigError { .. }));
    }
}
