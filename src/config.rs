use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

const DELAY_KEY: &str = "SORT_DEMO_DELAY_MS";
const LOCK_OWN_START_KEY: &str = "SORT_DEMO_LOCK_OWN_START";
const LOG_FILE_KEY: &str = "SORT_DEMO_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_delay_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub delay_step_ms: u64,
    /// Terminal rows per unit of value.
    pub bar_scale: f32,
    /// Log lines kept on screen.
    pub log_capacity: usize,
    /// Also disable a family's own start action while it runs.
    pub lock_own_start: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_delay_ms: 100,
            min_delay_ms: 0,
            max_delay_ms: 1000,
            delay_step_ms: 10,
            bar_scale: 0.5,
            log_capacity: 12,
            lock_own_start: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(DELAY_KEY) {
            let delay = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: DELAY_KEY,
                    value: value.clone(),
                })?;
            if delay < config.min_delay_ms || delay > config.max_delay_ms {
                return Err(ConfigError::DelayOutOfRange {
                    value: delay,
                    min: config.min_delay_ms,
                    max: config.max_delay_ms,
                });
            }
            config.default_delay_ms = delay;
        }

        if let Some(value) = lookup(LOCK_OWN_START_KEY) {
            config.lock_own_start = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        key: LOCK_OWN_START_KEY,
                        value,
                    })
                }
            };
        }

        config.log_file = lookup(LOG_FILE_KEY)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn clamp_delay(&self, delay_ms: u64) -> u64 {
        delay_ms.clamp(self.min_delay_ms, self.max_delay_ms)
    }

    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(self.default_delay_ms)
    }
}
