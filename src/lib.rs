pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::PrintConfig;
pub use core::printer::{join_to_string, print, write_joined, Printer};
pub use utils::error::{PrintError, Result};
