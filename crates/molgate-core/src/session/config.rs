use std::time::Duration;
use thiserror::Error;

/// How long a caller waits for the exclusivity primitive before the broker
/// presumes the current holder is stuck and forces recovery.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub acquire_timeout: Duration,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

#[derive(Default)]
pub struct BrokerConfigBuilder {
    acquire_timeout: Option<Duration>,
}

impl BrokerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<BrokerConfig, ConfigError> {
        let acquire_timeout = self.acquire_timeout.unwrap_or(DEFAULT_ACQUIRE_TIMEOUT);
        if acquire_timeout.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "acquire_timeout",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(BrokerConfig { acquire_timeout })
    }
}
