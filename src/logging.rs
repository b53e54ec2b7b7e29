//! Tracing subscriber setup for the service binary.

use crate::config::LogFormat;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Dependencies that are chatty at `info`/`debug`.
const NOISY_TARGETS: &[(&str, &str)] = &[
    ("aws_config", "warn"),
    ("aws_smithy_runtime", "warn"),
    ("aws_sdk_dynamodb", "info"),
    ("h2", "warn"),
    ("hyper", "warn"),
    ("hyper_util", "warn"),
];

/// Build the filter from the base level followed by the quieter dependency overrides.
///
/// `level` is any `EnvFilter` directive, so `debug,dynamodb_contacts=trace` works as well as
/// a bare level.
pub fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];
    for (target, target_level) in NOISY_TARGETS {
        directives.push(format!("{target}={target_level}"));
    }
    let filter = directives.join(",");
    EnvFilter::try_new(&filter)
        .map_err(|err| anyhow::anyhow!("invalid tracing filter '{filter}': {err}"))
}

/// Install the global subscriber writing to stdout.
pub fn init_logging(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let layer = match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(build_env_filter(level)?))
        .try_init()?;
    Ok(())
}
