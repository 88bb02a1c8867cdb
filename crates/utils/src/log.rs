use std::{env, io::IsTerminal};

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the whole process.
///
/// `RUST_LOG` takes precedence when set; otherwise everything logs at `info`.
pub fn init_tracing_logger() {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy("info"),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}
