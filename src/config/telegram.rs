//! Telegram configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Telegram Bot API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather
    #[serde(default)]
    pub bot_token: Option<SecretString>,

    /// Bot API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl TelegramConfig {
    /// Whether reminder delivery is configured
    pub fn is_configured(&self) -> bool {
        self.bot_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ValidationError::InvalidTelegramApiBase);
        }
        Ok(())
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base: default_api_base(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_config_defaults() {
        let config = TelegramConfig::default();
        assert_eq!(config.api_base, "https://api.telegram.org");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_is_configured_with_token() {
        let config = TelegramConfig {
            bot_token: Some(SecretString::new("123456:ABC-token".to_string())),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_is_configured_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(SecretString::new(String::new())),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_validation_invalid_api_base() {
        let config = TelegramConfig {
            api_base: "ftp://api.telegram.org".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
