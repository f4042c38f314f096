//! CLI argument parsing and validation.

mod args;

pub use args::{Args, AudioFormat, Config, ConfigError};
