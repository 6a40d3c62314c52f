//! Reminder scheduler configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Reminder sweep configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Whether the background sweep runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Seconds between sweeps
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl ReminderConfig {
    /// Get the sweep interval as Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Validate reminder configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_secs == 0 || self.interval_secs > 3600 {
            return Err(ValidationError::InvalidReminderInterval);
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_secs: default_interval(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_config_defaults() {
        let config = ReminderConfig::default();
        assert!(config.enabled);
        assert_eq!(config.interval_secs, 60);
    }

    #[test]
    fn test_interval_duration() {
        let config = ReminderConfig {
            interval_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_zero_interval() {
        let config = ReminderConfig {
            interval_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_oversized_interval() {
        let config = ReminderConfig {
            interval_secs: 7200,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
