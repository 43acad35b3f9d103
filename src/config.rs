use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use derive_more::Display;
use serde::Deserialize;
use std::path::Path;

/// Settings for the ambient parts of the crate
///
/// The registry itself has no knobs; only logging is configurable.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `fixture_forge=trace`
    pub level: String,
    pub format: LogFormat,
    /// Route output through the test harness so it is captured per test;
    /// `false` writes straight to stderr
    pub test_writer: bool,
}

#[derive(Debug, Display, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[display("compact")]
    Compact,
    #[display("pretty")]
    Pretty,
    #[display("json")]
    Json,
}

impl Settings {
    /// Loads defaults, then an optional `fixture_forge` file in the working
    /// directory, then environment variables prefixed with `FIXTURE_FORGE`.
    pub fn new() -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::with_name("fixture_forge").required(false))
            .add_source(Environment::with_prefix("FIXTURE_FORGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads defaults overlaid with an explicit configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::from(path.as_ref()))
            .build()?;

        config.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            .set_default("logging.test_writer", true)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingSettings {
                level: "info".to_string(),
                format: LogFormat::Compact,
                test_writer: true,
            },
        }
    }
}
