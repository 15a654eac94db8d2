use std::io;
use tracing::subscriber;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::ChronoLocal, prelude::*};

pub const LOG_ENV: &str = "KWGEN_LOG";

/// `--verbose` forces `trace`, otherwise `KWGEN_LOG` decides and falls back to `info`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("trace");
    }

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn setup_tracing(verbose: bool) {
    let console_layer = fmt::Layer::new()
        .with_writer(io::stderr)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".into()))
        .with_ansi(std::io::IsTerminal::is_terminal(&io::stderr()))
        .with_line_number(true)
        .with_file(true)
        .with_target(true);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter(verbose))
        .with(console_layer);

    subscriber::set_global_default(subscriber).expect("Failed to set global default subscriber");
}
