//! watson-tts CLI entry point.

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watson_tts::backend::create_backend;
use watson_tts::cli::{Args, Config};
use watson_tts::engine::{TtsEngine, TtsError, save_audio};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::resolve(&args)?;

    // Read the input before any request exists; an unreadable file must
    // never produce network traffic.
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;

    let backend = create_backend();
    let engine = TtsEngine::new(backend);

    let synthesis = match engine.synthesize(&text, config.format) {
        Ok(synthesis) => synthesis,
        Err(TtsError::Rejected { status_line, body }) => {
            // Show the service's error payload verbatim before failing.
            println!("{body}");
            bail!("HTTP request failed: {status_line}");
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", synthesis.status_line);
    save_audio(&config.output, &synthesis.audio)?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watson_tts=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
