//! Observability (logging)
//!
//! Structured diagnostics go to stderr through `tracing`, leaving stdout to
//! the user-facing progress output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count
///
/// # Examples
///
/// ```
/// # use vapor_scaffold::observability::default_directive;
/// assert_eq!(default_directive(0), "warn");
/// assert_eq!(default_directive(2), "debug");
/// assert_eq!(default_directive(9), "trace");
/// ```
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
