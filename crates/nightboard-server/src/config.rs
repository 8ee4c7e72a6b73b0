//! Environment configuration, loaded once at startup.
//!
//! Recognized variables: `APP_VERSION`, `DEPLOY_TIME`, `HOSTNAME`. Everything
//! else about the process (bind address, route table) is fixed. Handlers only
//! ever see the resulting immutable [`AppConfig`]; nothing reads the ambient
//! environment after startup.

use std::net::SocketAddr;

use nightboard_core::error::{NightboardError, Result};

/// Fixed bind address of the service.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub version: String,
    pub deploy_time: String,
    pub hostname: String,
    pub listen: String,
}

/// Load from the process environment.
pub fn from_env() -> Result<AppConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load through an arbitrary lookup, so tests never touch process state.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
    let cfg = AppConfig {
        version: lookup("APP_VERSION").unwrap_or_else(default_version),
        deploy_time: lookup("DEPLOY_TIME").unwrap_or_else(default_deploy_time),
        hostname: lookup("HOSTNAME").unwrap_or_else(default_hostname),
        listen: DEFAULT_LISTEN.to_string(),
    };
    cfg.validate()?;
    Ok(cfg)
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(NightboardError::Config(
                "APP_VERSION must not be empty".into(),
            ));
        }
        self.listen.parse::<SocketAddr>().map_err(|e| {
            NightboardError::Config(format!("listen must be a valid socket address: {e}"))
        })?;
        Ok(())
    }
}

fn default_version() -> String {
    "1.0.0".into()
}

fn default_deploy_time() -> String {
    "Неизвестно".into()
}

fn default_hostname() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "unknown".into())
}
