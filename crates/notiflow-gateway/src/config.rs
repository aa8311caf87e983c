use anyhow::{bail, Result};
use notiflow_types::Message;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Message content of a dispatch entry, tagged by `kind`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageSpec {
    Text {
        text: String,
    },
    Photo {
        text: String,
        file_path: String,
        format: String,
    },
    File {
        text: String,
        file_path: String,
        format: String,
    },
    Video {
        text: String,
        file_path: String,
        format: String,
        duration_secs: f64,
    },
}

impl MessageSpec {
    pub fn build(&self) -> Result<Message> {
        let message = match self {
            MessageSpec::Text { text } => Message::text(text.as_str())?,
            MessageSpec::Photo {
                text,
                file_path,
                format,
            } => Message::photo(text.as_str(), file_path.as_str(), format)?,
            MessageSpec::File {
                text,
                file_path,
                format,
            } => Message::file(text.as_str(), file_path.as_str(), format)?,
            MessageSpec::Video {
                text,
                file_path,
                format,
                duration_secs,
            } => {
                let Ok(duration) = Duration::try_from_secs_f64(*duration_secs) else {
                    bail!(
                        "duration_secs must be a non-negative number, got {}",
                        duration_secs
                    );
                };
                Message::video(text.as_str(), file_path.as_str(), format, duration)?
            }
        };
        Ok(message)
    }
}

/// One send: channel name, raw recipient, message
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DispatchEntry {
    pub channel: String,
    pub recipient: String,
    pub message: MessageSpec,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Empty means the built-in sample plan
    pub dispatch: Vec<DispatchEntry>,
}

impl Config {
    /// Get the global config path: ~/.notiflow/notiflow.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".notiflow").join("notiflow.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.notiflow/notiflow.toml (optional)
    /// 2. Local override: ./notiflow.toml (optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder();

        // Layer 1: Global config
        if let Some(path) = Self::global_config_path() {
            config_builder = config_builder.add_source(config::File::from(path).required(false));
        }

        config_builder = config_builder
            // Layer 2: Local workspace config
            .add_source(config::File::with_name("notiflow").required(false))
            // Layer 3: Environment variables with NOTIFLOW__ prefix
            .add_source(config::Environment::with_prefix("NOTIFLOW").separator("__"));

        // Layer 4: Convenience env var override
        if let Ok(level) = env::var("NOTIFLOW_LOG_LEVEL") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Parse a TOML document on its own, without files or environment
    #[cfg(test)]
    pub fn from_toml(source: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
