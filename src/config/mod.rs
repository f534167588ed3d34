//! Configuration file and defaults

pub mod file;
pub mod loader;

pub use file::{ConfigFile, RateSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
