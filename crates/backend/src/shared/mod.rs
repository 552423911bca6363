pub mod config;
pub mod fixtures;
pub mod format;
