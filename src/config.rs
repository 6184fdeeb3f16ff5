//! Configuration parsing.
//!
//! The whole configuration lives in one TOML file. Every section and field is
//! optional; an empty file yields [`AppConfig::default`].
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [store]
//! site_title = "Loja Exemplo"
//! site_url = "https://loja.example.com"
//! date_format = "%d/%m/%Y"
//!
//! [notification]
//! enabled = true
//! email_type = "multipart"
//!
//! [security]
//! nonce_secret = "long random string"
//! nonce_lifetime_secs = 86400
//! ```

use crate::email::format::format_date;
use crate::email::NotificationSettings;
use crate::model::OrderId;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Secret used when none is configured. Fine for local runs only.
pub const DEFAULT_NONCE_SECRET: &str = "jadlog-tracking-insecure-default";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub notification: NotificationSettings,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.nonce_secret.is_empty() {
            return Err(ConfigError::Validation(
                "security.nonce_secret must not be empty".to_string(),
            ));
        }
        if self.security.nonce_lifetime_secs < 2 {
            return Err(ConfigError::Validation(
                "security.nonce_lifetime_secs must be at least 2".to_string(),
            ));
        }
        format_date(Utc::now(), &self.store.date_format)
            .map_err(|e| ConfigError::Validation(format!("store.date_format: {e}")))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Facts about the shop that appear in customer-facing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub site_title: String,
    pub site_url: String,
    /// strftime pattern for the `{date}` placeholder.
    pub date_format: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            site_title: "My Store".to_string(),
            site_url: "http://localhost:8080".to_string(),
            date_format: "%B %-d, %Y".to_string(),
        }
    }
}

impl StoreConfig {
    /// Customer page for one order, the target of the email's tracking link.
    pub fn view_order_url(&self, id: OrderId) -> String {
        format!(
            "{}/my-account/view-order/{}/",
            self.site_url.trim_end_matches('/'),
            id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub nonce_secret: String,
    /// A nonce stays valid between half and all of this many seconds.
    pub nonce_lifetime_secs: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            nonce_secret: DEFAULT_NONCE_SECRET.to_string(),
            nonce_lifetime_secs: 86_400,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailType;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.notification.enabled);
    }

    #[test]
    fn sections_are_partial() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            site_title = "Loja"

            [notification]
            enabled = false
            email_type = "plain"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.site_title, "Loja");
        assert_eq!(config.store.date_format, "%B %-d, %Y");
        assert!(!config.notification.enabled);
        assert_eq!(config.notification.email_type, EmailType::Plain);
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn unknown_email_type_is_rejected() {
        let result = AppConfig::from_toml("[notification]\nemail_type = \"fax\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AppConfig::from_toml("[security]\nnonce_secret = \"\"").unwrap_err();
        match err {
            ConfigError::Validation(msg) => assert!(msg.contains("nonce_secret"), "{msg}"),
            _ => panic!("Expected ConfigError::Validation, got {err:?}"),
        }

        let err = AppConfig::from_toml("[store]\ndate_format = \"%Q\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn view_order_url_ignores_trailing_slash() {
        let store = StoreConfig {
            site_url: "https://loja.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(
            store.view_order_url(OrderId(12)),
            "https://loja.example.com/my-account/view-order/12/"
        );
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
