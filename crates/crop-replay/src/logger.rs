#[cfg(feature = "log")]
use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
#[cfg(feature = "log")]
use tracing_appender::non_blocking::WorkerGuard;
#[cfg(feature = "log")]
use tracing_subscriber::{filter::Targets, fmt::format::FmtSpan, layer::SubscriberExt};

/// Logs to stderr, keeping stdout for the report.
#[cfg(feature = "log")]
pub fn setup_logger(debug: bool) -> Result<WorkerGuard, SetGlobalDefaultError> {
    let level = if debug { Level::TRACE } else { Level::INFO };
    let filter = Targets::new().with_default(level);

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let logger = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(debug)
        .with_span_events(FmtSpan::CLOSE);

    let collector = tracing_subscriber::registry().with(logger).with(filter);
    set_global_default(collector)?;

    Ok(guard)
}

#[cfg(not(feature = "log"))]
pub fn setup_logger(_debug: bool) -> Result<(), core::convert::Infallible> {
    Ok(())
}
