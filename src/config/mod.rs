pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::ConfigPath;
use toml_config::FileConfig;

pub const DEFAULT_VALUES: [&str; 3] = ["1", "2", "3"];
pub const DEFAULT_DELIMITER: &str = ";";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintConfig {
    pub values: Vec<String>,
    pub delimiter: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.iter().map(|v| v.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl PrintConfig {
    /// Layers a config file on top; keys missing from the file keep their value.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(values) = file.values {
            self.values = values;
        }
        if let Some(delimiter) = file.delimiter {
            self.delimiter = delimiter;
        }
        self
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "delim-print")]
#[command(about = "Print values on one line separated by a delimiter")]
pub struct CliConfig {
    /// Values to print; defaults to 1 2 3
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Text placed between consecutive values
    #[arg(short, long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// TOML file with `values` and/or `delimiter`
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            ConfigPath(path).validate()?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<PrintConfig> {
        let mut resolved = PrintConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file {}", path);
            resolved = resolved.merge_file(FileConfig::from_file(path)?);
        }
        if !self.values.is_empty() {
            resolved.values = self.values.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            resolved.delimiter = delimiter.clone();
        }

        Ok(resolved)
    }
}
