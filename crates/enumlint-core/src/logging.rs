//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ENUMLINT_LOG";

static INIT: Once = Once::new();

/// Initialize the enumlint logging system.
///
/// Reads `ENUMLINT_LOG` for filter directives, e.g. `ENUMLINT_LOG=enumlint_enforce=debug`.
/// Falls back to `warn` (or `debug` when `verbose`) if the variable is unset or invalid.
/// Output goes to stderr so it never mixes with lint results on stdout.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
