use tracing_subscriber::filter::LevelFilter;

/// Rounds f64 ms to 3 decimals.
pub fn pretty_ms(ms: f64) -> f64 {
    (ms * 1_000.0).trunc() / 1_000.0
}

/// Map the clap-verbosity-flag level onto a tracing filter.
pub fn tracing_level(filter: log::LevelFilter) -> LevelFilter {
    match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}
