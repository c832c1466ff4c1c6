use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `level`, an `EnvFilter`
/// directive such as `info` or `useful_temporal=trace`.
///
/// An invalid directive falls back to `info` with a warning.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(level: &str) -> anyhow::Result<()> {
    let (filter, rejected) = match EnvFilter::try_new(level) {
        Ok(filter) => (filter, false),
        Err(_e) => (EnvFilter::new(useful_core::constants::DEFAULT_LOG_LEVEL), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init()?;

    if rejected {
        tracing::warn!(level, "Invalid log level, falling back to default");
    }

    Ok(())
}
