//! Tracing subscriber setup for the command line.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level for a count of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr fmt subscriber. `RUST_LOG` directives are honored and
/// the verbosity sets the default level.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::from_default_env().add_directive(level_for_verbosity(verbosity).into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0);
        init_tracing(2);
    }
}
