//! Tracing subscriber setup for test binaries

use tracing::{debug, warn, Subscriber};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingSettings, Settings};
use crate::error::Result;
use crate::infrastructure::log_messages::telemetry as messages;

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Installs a global `fmt` subscriber configured from `settings`
///
/// With `test_writer` set, output goes through the test harness and is only
/// shown for failing tests; otherwise it is written to stderr. Returns `false`
/// when a subscriber was already installed, which happens whenever several
/// tests in one binary call this.
pub fn init(settings: &LoggingSettings) -> bool {
    let (subscriber, valid_filter) = subscriber(settings);
    let installed = subscriber.try_init().is_ok();

    if !valid_filter {
        warn!(level = %settings.level, "{}", messages::INVALID_FILTER);
    }
    if !installed {
        debug!("{}", messages::ALREADY_INSTALLED);
    }
    installed
}

/// Builds the subscriber described by `settings` without installing it
///
/// The flag is `false` when the configured level was not a valid filter and
/// `info` was used instead.
fn subscriber(settings: &LoggingSettings) -> (BoxedSubscriber, bool) {
    let parsed = EnvFilter::try_new(&settings.level);
    let valid_filter = parsed.is_ok();
    let filter = parsed.unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = if settings.test_writer {
        BoxMakeWriter::new(TestWriter::new())
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let subscriber: BoxedSubscriber = match settings.format {
        LogFormat::Compact => Box::new(builder.compact().finish()),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    };
    (subscriber, valid_filter)
}

/// Loads [`Settings`] from the usual sources and installs the subscriber
/// they describe
pub fn init_from_settings() -> Result<bool> {
    let settings = Settings::new()?;
    Ok(init(&settings.logging))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let settings = LoggingSettings {
            level: "not a [valid filter".to_string(),
            format: LogFormat::Compact,
            test_writer: true,
        };
        init(&settings);
        assert!(!init(&settings));
    }

    #[test]
    fn settings_driven_init_loads_defaults() {
        assert!(init_from_settings().is_ok());
    }

    #[test]
    fn stderr_writer_is_used_when_capture_is_off() {
        let settings = LoggingSettings {
            level: "fixture_forge=debug".to_string(),
            format: LogFormat::Json,
            test_writer: false,
        };
        let (built, valid_filter) = subscriber(&settings);
        assert!(valid_filter);
        tracing::subscriber::with_default(built, || {
            debug!("{}", messages::ALREADY_INSTALLED);
        });
    }

    #[test]
    fn invalid_level_falls_back() {
        let settings = LoggingSettings {
            level: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
            test_writer: true,
        };
        let (_, valid_filter) = subscriber(&settings);
        assert!(!valid_filter);
    }
}
