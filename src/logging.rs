// File: src/logging.rs
use tracing_subscriber::{filter::LevelFilter, fmt};

/// Maps `-q` / `-v` counts onto a level. INFO when neither is given.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::WARN;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a global subscriber writing to stderr; stdout is reserved for
/// records.
pub fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_from_flags(2, true), LevelFilter::WARN);
        assert_eq!(level_from_flags(0, false), LevelFilter::INFO);
        assert_eq!(level_from_flags(1, false), LevelFilter::DEBUG);
        assert_eq!(level_from_flags(5, false), LevelFilter::TRACE);
    }
}
