//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables with defaults suitable
//! for a local broker.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::queue::ConnectionMode;

/// Default broker host when none is configured.
pub const DEFAULT_BROKER_HOST: &str = "localhost";

/// Alternate broker port carried in the deployment constants. It is never
/// applied to the connection; publishes go to the broker's default AMQP port.
pub const ALT_BROKER_PORT: u16 = 9999;

/// Default path of the shipping feed.
pub const DEFAULT_FEED_PATH: &str = "shipping.csv";

/// Default pause between publishes, in seconds.
pub const DEFAULT_PUBLISH_DELAY_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Broker host name or IP address
    pub broker_host: String,

    /// Path of the CSV shipping feed
    pub feed_path: PathBuf,

    /// Pause between publishes, in seconds
    pub publish_delay_secs: u64,

    /// Whether to open the broker management console at startup
    pub offer_admin_site: bool,

    /// Whether to reuse one broker connection for the whole run instead of
    /// opening one per message. Off by default; never enabled silently.
    pub pooled_connection: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            broker_host: env::var("SHIPPING_BROKER_HOST")
                .unwrap_or_else(|_| DEFAULT_BROKER_HOST.to_string()),

            feed_path: env::var("SHIPPING_FEED")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FEED_PATH)),

            publish_delay_secs: env::var("SHIPPING_PUBLISH_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PUBLISH_DELAY_SECS),

            offer_admin_site: parse_bool("SHIPPING_OFFER_ADMIN_SITE", true),

            pooled_connection: parse_bool("SHIPPING_POOLED_CONNECTION", false),
        }
    }

    /// AMQP URL for the configured host. Only the host is configurable; the
    /// broker's default port applies.
    pub fn amqp_url(&self) -> String {
        format!("amqp://{}", self.broker_host)
    }

    /// Pause between publishes.
    pub fn publish_delay(&self) -> Duration {
        Duration::from_secs(self.publish_delay_secs)
    }

    /// Connection mode for the publisher.
    pub fn connection_mode(&self) -> ConnectionMode {
        if self.pooled_connection {
            ConnectionMode::Pooled
        } else {
            ConnectionMode::PerMessage
        }
    }
}

/// Parse a boolean flag like "true" or "0".
fn parse_bool(name: &str, default: bool) -> bool {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!(env_var = name, value = %raw, "Invalid boolean value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            broker_host: "localhost".to_string(),
            feed_path: PathBuf::from(DEFAULT_FEED_PATH),
            publish_delay_secs: DEFAULT_PUBLISH_DELAY_SECS,
            offer_admin_site: true,
            pooled_connection: false,
        }
    }

    #[test]
    fn test_parse_bool_valid() {
        env::set_var("TEST_BOOL_VALID", "true");
        assert!(parse_bool("TEST_BOOL_VALID", false));
        env::set_var("TEST_BOOL_VALID", "off");
        assert!(!parse_bool("TEST_BOOL_VALID", true));
        env::remove_var("TEST_BOOL_VALID");
    }

    #[test]
    fn test_parse_bool_default() {
        assert!(parse_bool("NONEXISTENT_BOOL_VAR", true));
        assert!(!parse_bool("NONEXISTENT_BOOL_VAR", false));
    }

    #[test]
    fn test_parse_bool_invalid_uses_default() {
        env::set_var("TEST_BOOL_INVALID", "maybe");
        assert!(parse_bool("TEST_BOOL_INVALID", true));
        env::remove_var("TEST_BOOL_INVALID");
    }

    #[test]
    fn test_amqp_url_uses_default_port() {
        let config = base_config();
        // The alternate port constant is never part of the URL.
        assert_eq!(config.amqp_url(), "amqp://localhost");
        assert!(!config.amqp_url().contains(&ALT_BROKER_PORT.to_string()));
    }

    #[test]
    fn test_connection_mode_selection() {
        let mut config = base_config();
        assert_eq!(config.connection_mode(), ConnectionMode::PerMessage);

        config.pooled_connection = true;
        assert_eq!(config.connection_mode(), ConnectionMode::Pooled);
    }
}
