//! Synthesis pipeline orchestration.
//!
//! This module coordinates request construction, transport, and
//! response classification, and owns the output writer.

mod tts;

pub use tts::{Synthesis, TtsEngine, TtsError, save_audio};
