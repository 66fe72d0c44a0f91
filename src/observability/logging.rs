//! Tracing subscriber setup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber for the process.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.log_level`. Returns `false` if a global subscriber was already
/// installed, in which case nothing changes.
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        let config = Config::default();
        // Another test may already have installed a subscriber.
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
