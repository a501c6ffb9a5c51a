use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse {path}: {source}")]
    TomlFileError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PrintError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PrintError::Io(e) => format!("Could not write output: {}", e),
            PrintError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            PrintError::TomlFileError { path, source } => {
                format!("Config file {} is not valid TOML: {}", path, source)
            }
            PrintError::ConfigError { message } => format!("Configuration problem: {}", message),
            PrintError::ValidationError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrintError::Io(_) => "Check that standard output is open and writable",
            PrintError::TomlError(_) | PrintError::TomlFileError { .. } => {
                "Use `values = [...]` and `delimiter = \"...\"` as top-level keys"
            }
            PrintError::ConfigError { .. } => "Check the path passed to --config",
            PrintError::ValidationError { .. } => "Fix the option value and try again",
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrintError::Io(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrintError>;
