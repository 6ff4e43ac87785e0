#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

#[cfg(feature = "cli")]
pub use cli::{CartCommand, CliConfig};
pub use file_config::FileConfig;
