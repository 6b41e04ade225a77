//! Configuration management

use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CACHE_SWEEP_INTERVAL_SECS, DEFAULT_HOME_HREF, DEFAULT_HOME_LABEL,
    DEFAULT_MENU_CACHE_TTL_SECS, DEFAULT_REMOTE_TIMEOUT_SECS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub remote: RemoteSettings,
    pub menu: MenuSettings,
    pub breadcrumb: BreadcrumbSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Allowed CORS origin for the admin frontend
    pub cors_origin: String,
}

/// Remote API that stores studies, menu templates, dashboards and widgets
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub api_token: Option<String>,
}

impl RemoteSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    pub cache_ttl_secs: u64,
    /// 0 disables the background sweep; expired entries are still evicted on read
    pub sweep_interval_secs: u64,
}

impl MenuSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BreadcrumbSettings {
    pub home_label: String,
    pub home_href: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// `json` or `pretty`
    pub format: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Builder pre-populated with every default value
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "study-console")?
            .set_default("app.cors_origin", "http://localhost:5173")?
            .set_default("remote.base_url", "http://127.0.0.1:8000/api")?
            .set_default("remote.timeout_secs", DEFAULT_REMOTE_TIMEOUT_SECS)?
            .set_default("menu.cache_ttl_secs", DEFAULT_MENU_CACHE_TTL_SECS)?
            .set_default("menu.sweep_interval_secs", DEFAULT_CACHE_SWEEP_INTERVAL_SECS)?
            .set_default("breadcrumb.home_label", DEFAULT_HOME_LABEL)?
            .set_default("breadcrumb.home_href", DEFAULT_HOME_HREF)?
            .set_default("logging.format", "pretty")
    }
}
