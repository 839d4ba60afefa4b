use config::builder::DefaultState;
use config::{ConfigBuilder, FileFormat};
use plugcheck_logging::LogFormat;
use serde::Deserialize;

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "warn"  # trace, debug, info, warn, error
format = "text"  # text or json

[output]
format = "human"  # human or json
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// How the validation report is printed
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    fn defaults() -> ConfigBuilder<DefaultState> {
        config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG.trim(),
            FileFormat::Toml,
        ))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Local override: ./plugcheck.toml (optional)
    /// 3. Environment variables with PLUGCHECK__ prefix (highest priority)
    ///
    /// Nothing is ever written to disk.
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::defaults()
            .add_source(config::File::with_name("plugcheck").required(false))
            .add_source(config::Environment::with_prefix("PLUGCHECK").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Defaults overlaid with a TOML document
    #[cfg(test)]
    fn from_toml(overrides: &str) -> anyhow::Result<Self> {
        let config = Self::defaults()
            .add_source(config::File::from_str(overrides, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
