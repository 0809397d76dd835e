// 📝 Structured logging setup shared by both binaries
//
// RUST_LOG takes precedence over the configured level.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Log to stderr; used by the web server and the one-shot CLI commands
pub fn init_stderr(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Log to the configured file, or nowhere, so the terminal UI owns the screen
pub fn init_for_terminal_ui(config: &LoggingConfig) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_ansi(false);

    let _ = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::sink).try_init(),
    };
    Ok(())
}
