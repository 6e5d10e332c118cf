use serde::Deserialize;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::log::SetLoggerError;
use tracing_log::LogTracer;
use tracing_subscriber::{
    fmt::{self, time::UtcTime, MakeWriter},
    layer::SubscriberExt,
    EnvFilter, Registry,
};

/// How log lines are written. `json` is for collectors, `pretty` for a
/// terminal.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to bridge `log` records: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("a global subscriber is already installed: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Builds the subscriber for `service`. `RUST_LOG`, when set, wins over
/// `default_level`.
pub fn get_subscriber<Sink>(
    service: impl Into<String>,
    default_level: &str,
    format: LogFormat,
    sink: Sink,
) -> Box<dyn Subscriber + Send + Sync>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = Registry::default().with(env_filter);

    match format {
        LogFormat::Json => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(service.into(), sink)),
        ),
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::Layer::new()
                    .with_writer(sink)
                    .with_target(false)
                    .with_thread_names(true)
                    .with_timer(UtcTime::rfc_3339()),
            ),
        ),
    }
}

/// Installs `subscriber` process-wide and routes `log` records into it.
/// Fails if called twice.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
