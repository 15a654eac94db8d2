pub mod errors;
pub mod toml;

pub use errors::ConfigError;
pub use crate::toml::{Config, KwgenConfig, Overrides, CONFIG_FILE_NAME};
