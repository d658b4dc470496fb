//! Log setup shared by the desktop binary.
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from the verbosity
//! count given on the command line.

/// Default filter for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "portfolio=info,portfolio_core=info,warn",
        1 => "portfolio=debug,portfolio_core=debug,info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(verbosity))),
        )
        .init();
}
