use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::error::Result;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "RELAY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Sink endpoint. Missing or empty aborts every invocation, not startup.
    #[serde(default)]
    pub sink_url: Option<String>,

    /// Ruleset document path; the built-in ruleset is used when unset.
    #[serde(default)]
    pub schema_path: Option<String>,

    #[serde(default = "default_http_port")]
    pub http_port: u16,

    #[serde(default = "default_invocation_path")]
    pub invocation_path: String,

    #[serde(default = "default_publish_timeout_secs")]
    pub publish_timeout_secs: u64,

    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_http_port() -> u16 {
    3000
}

fn default_invocation_path() -> String {
    "/invocations".to_string()
}

fn default_publish_timeout_secs() -> u64 {
    10
}

fn default_channel_capacity() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sink_url: None,
            schema_path: None,
            http_port: default_http_port(),
            invocation_path: default_invocation_path(),
            publish_timeout_secs: default_publish_timeout_secs(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn sink(&self) -> SinkConfig {
        SinkConfig {
            url: self.sink_url.clone(),
        }
    }

    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_secs)
    }
}

/// Sink settings handed to the executor explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkConfig {
    pub url: Option<String>,
}

impl SinkConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// The configured URL, treating blank values as absent.
    pub fn endpoint(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
