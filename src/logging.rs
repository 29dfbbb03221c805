//! Diagnostic tracing, separate from the narration printed to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Call once, from `main`.
///
/// Reads `RUST_LOG` and defaults to `warn` if unset. Output goes to stderr.
///
/// ```bash
/// RUST_LOG=grocery_generics=debug cargo run --bin grocery_run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_installs_global_subscriber() {
        init();
        tracing::warn!("subscriber installed");

        let second = tracing_subscriber::registry().try_init();
        assert!(second.is_err());
    }
}
