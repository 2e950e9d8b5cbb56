use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use crate::models::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub page: PageConfig,
    pub browser: BrowserConfig,
    pub notifications: NotificationsConfig,
    /// Open the celebration URL in the user's default browser on a hit.
    pub open_browser: bool,
    /// Seconds between polling cycles.
    pub poll_interval_secs: u64,
    pub stores: Vec<Store>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub navigation_timeout_ms: u64,
    pub user_agent: String,
    /// Save a `success-<epoch-millis>.png` screenshot on every hit.
    pub capture: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub headless: bool,
    pub chrome_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Discord-compatible webhook endpoint. Unset means notifications only
    /// go to the log.
    pub url: Option<String>,
    pub username: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Add environment-specific config
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local config (ignored by git)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix "SHELFWATCH_"
            .add_source(Environment::with_prefix("SHELFWATCH").separator("__"))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;

        // Add Chrome path from environment if not set
        if config.browser.chrome_path.is_none() {
            config.browser.chrome_path = env::var("CHROME_PATH").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.navigation_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "page.navigation_timeout_ms must be greater than 0".into(),
            ));
        }

        if self.page.user_agent.trim().is_empty() {
            return Err(ConfigError::Message("page.user_agent must not be empty".into()));
        }

        if self.poll_interval_secs == 0 {
            return Err(ConfigError::Message("poll_interval_secs must be greater than 0".into()));
        }

        for store in &self.stores {
            if store.name.trim().is_empty() {
                return Err(ConfigError::Message("store name must not be empty".into()));
            }

            if let Some(cart_url) = &store.cart_url {
                if Url::parse(cart_url).is_err() {
                    return Err(ConfigError::Message(format!(
                        "invalid cart_url for store '{}'",
                        store.name
                    )));
                }
            }

            for link in &store.links {
                if Url::parse(&link.url).is_err() {
                    return Err(ConfigError::Message(format!(
                        "invalid link URL '{}' for store '{}'",
                        link.url, store.name
                    )));
                }
            }
        }

        if let Some(webhook_url) = &self.notifications.webhook.url {
            if Url::parse(webhook_url).is_err() {
                return Err(ConfigError::Message("invalid notifications.webhook.url".into()));
            }
        }

        Ok(())
    }
}
