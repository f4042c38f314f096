//! watson-tts: command-line client for the Watson text-to-speech service.
//!
//! This crate reads a local text file, sends its contents to the remote
//! synthesis endpoint, and writes the returned audio bytes to a local file.

pub mod backend;
pub mod cli;
pub mod engine;
