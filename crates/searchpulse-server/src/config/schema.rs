use std::net::SocketAddr;

use serde::Deserialize;
use searchpulse_core::error::{Result, SearchPulseError};
use searchpulse_core::UNKNOWN_TERM;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub search: SearchSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SearchPulseError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.search.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Attached to every request span.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Body of `GET /`.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            service_name: default_service_name(),
            greeting: default_greeting(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.service_name.trim().is_empty() {
            return Err(SearchPulseError::BadRequest(
                "server.service_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SearchPulseError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_service_name() -> String {
    "searchpulse".into()
}
fn default_greeting() -> String {
    "Welcome to our e-commerce site!".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Term recorded when `/search` has no `product` parameter.
    #[serde(default = "default_term")]
    pub default_term: String,

    /// Default size of `/top-searches`.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Largest `limit` a client may ask for.
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            default_term: default_term(),
            top_n: default_top_n(),
            max_top_n: default_max_top_n(),
        }
    }
}

impl SearchSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1000).contains(&self.max_top_n) {
            return Err(SearchPulseError::BadRequest(
                "search.max_top_n must be between 1 and 1000".into(),
            ));
        }
        if !(1..=self.max_top_n).contains(&self.top_n) {
            return Err(SearchPulseError::BadRequest(
                "search.top_n must be between 1 and search.max_top_n".into(),
            ));
        }
        Ok(())
    }
}

fn default_term() -> String {
    UNKNOWN_TERM.into()
}
fn default_top_n() -> usize {
    5
}
fn default_max_top_n() -> usize {
    100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// EnvFilter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSection {
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(SearchPulseError::BadRequest(
                "logging.level must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
