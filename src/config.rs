//! Assistant configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantConfig {
    pub reply_delay: Duration,
    pub start_open: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self { reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS), start_open: false }
    }
}

impl AssistantConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `ASSISTANT_REPLY_DELAY_MS`: simulated reply latency, default 1000
    /// - `ASSISTANT_START_OPEN`: `true`/`false`, default `false`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AssistantConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let reply_delay_ms = match lookup("ASSISTANT_REPLY_DELAY_MS") {
            Some(raw) => parse_u64("ASSISTANT_REPLY_DELAY_MS", &raw)?,
            None => DEFAULT_REPLY_DELAY_MS,
        };
        let start_open = match lookup("ASSISTANT_START_OPEN") {
            Some(raw) => parse_bool("ASSISTANT_START_OPEN", &raw)?,
            None => false,
        };

        Ok(Self { reply_delay: Duration::from_millis(reply_delay_ms), start_open })
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue { var: var.into(), value: value.into() }
}

fn parse_u64(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| invalid(var, raw))
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, raw)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
