//! CLI argument definitions and config resolution.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Watson text-to-speech CLI.
#[derive(Parser, Debug)]
#[command(name = "watson-tts")]
#[command(about = "Synthesize speech from a text file using the Watson TTS service")]
#[command(version)]
pub struct Args {
    /// The output file format (smallest to largest): ogg, flac, wav
    #[arg(long, default_value = "ogg")]
    pub format: String,

    /// The output filename
    #[arg(long, default_value = "out")]
    pub out: PathBuf,

    /// Path to the text file to synthesize
    pub input: Option<PathBuf>,
}

/// Requested audio container/codec family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioFormat {
    #[default]
    Ogg,
    Flac,
    Wav,
}

impl AudioFormat {
    /// Parse a user-supplied format name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "ogg" => Ok(AudioFormat::Ogg),
            "flac" => Ok(AudioFormat::Flac),
            "wav" => Ok(AudioFormat::Wav),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }

    /// Returns the user-facing format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Ogg => "ogg",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
        }
    }

    /// Returns the wire value sent in the `Accept` header.
    ///
    /// Identity for every format except ogg, which the service expects
    /// with an explicit opus codec parameter.
    pub fn wire_format(&self) -> &'static str {
        match self {
            AudioFormat::Ogg => "ogg;codecs=opus",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
        }
    }
}

/// Errors that can occur when resolving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid format: {0}. Valid formats: ogg, flac, wav")]
    InvalidFormat(String),

    #[error("Must give a text filepath")]
    MissingInput,
}

/// Validated run configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested audio format.
    pub format: AudioFormat,
    /// Destination file for the audio bytes.
    pub output: PathBuf,
    /// Source text file.
    pub input: PathBuf,
}

impl Config {
    /// Resolve raw arguments into a validated config.
    ///
    /// Pure: touches neither the filesystem nor the network, so every
    /// configuration error is reported before any I/O happens.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let format = AudioFormat::from_name(&args.format)?;
        let input = args.input.clone().ok_or(ConfigError::MissingInput)?;

        Ok(Self {
            format,
            output: args.out.clone(),
            input,
        })
    }
}
