use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{
    config::{LoggerConfig, LoggerFormat},
    error::LoggerError,
};

/// Install the process-wide tracing subscriber described by `cfg`.
///
/// Call once per process; a second call reports `AlreadyInitialized`.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(&cfg.level)
        .map_err(|_| LoggerError::InvalidLogLevel(cfg.level.clone()))?;
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LoggerFormat::Text => init_with(
            registry.with(
                fmt::layer()
                    .with_ansi(cfg.use_color)
                    .with_target(cfg.with_targets)
                    .with_timer(mk_timer()),
            ),
        ),
        LoggerFormat::Json => init_with(
            registry.with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(cfg.with_targets)
                    .with_timer(mk_timer()),
            ),
        ),
    }
}

fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn init_with<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(as_error)
}

fn as_error(e: impl std::fmt::Display) -> LoggerError {
    let s = e.to_string();
    if s.contains("SetGlobalDefaultError") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(s)
    }
}
