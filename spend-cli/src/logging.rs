use tracing::Level;

/// Resolve the log level: `--verbose` wins, then the configured level, then warn.
pub fn resolve_level(verbose: bool, configured: &str) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    configured.trim().parse().unwrap_or(Level::WARN)
}

/// Install the stderr fmt subscriber. A second call reports the failure on stderr.
pub fn init(level: Level) {
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("logging not initialised: {e}");
    }
}
