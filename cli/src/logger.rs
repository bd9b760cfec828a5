//! `tracing` subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter for a `-v` count. `RUST_LOG` takes precedence when set.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        // Only our own warnings
        0 => "off,pokedex=warn",
        // Progress, plus client failures
        1 => "off,pokedex=info,pokeapi_core=error",
        // Every request and response
        2 => "off,pokedex=debug,pokeapi_core=debug",
        _ => "trace",
    }
}

pub fn init_logger(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
