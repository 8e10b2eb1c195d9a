use dashmap::DashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";
const DEFAULT_INIT_TIMEOUT_SECS: u64 = 30;
const KERNEL_HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Key/value configuration source
///
/// `from_env` snapshots the process environment (after `.env` has been
/// loaded by the binary); tests build one with `new` and `set`.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_or<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        }
    }

    fn flag_or(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        }
    }
}

/// Typed application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub seed_on_startup: bool,
    pub init_timeout: Duration,
    /// Reported by `GET /`.
    pub hostname: String,
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        Ok(Self {
            host: config.get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: config.parse_or("PORT", DEFAULT_PORT)?,
            database_url: config
                .get("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            seed_on_startup: config.flag_or("SEED_ON_STARTUP", true)?,
            init_timeout: Duration::from_secs(
                config.parse_or("INIT_TIMEOUT_SECS", DEFAULT_INIT_TIMEOUT_SECS)?,
            ),
            hostname: config
                .get("HOSTNAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(system_hostname),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn system_hostname() -> String {
    std::fs::read_to_string(KERNEL_HOSTNAME_PATH)
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let service = ConfigService::new();
        service.set("HOSTNAME", "catalog-1");
        let config = AppConfig::from_service(&service).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.seed_on_startup);
        assert_eq!(config.init_timeout, Duration::from_secs(30));
        assert_eq!(config.hostname, "catalog-1");
    }

    #[test]
    fn test_overrides() {
        let service = ConfigService::new();
        service.set("PORT", "8081");
        service.set("SEED_ON_STARTUP", "no");
        service.set("DATABASE_URL", "sqlite::memory:");
        let config = AppConfig::from_service(&service).unwrap();

        assert_eq!(config.port, 8081);
        assert!(!config.seed_on_startup);
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let service = ConfigService::new();
        service.set("PORT", "eighty");
        let err = AppConfig::from_service(&service).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let service = ConfigService::new();
        service.set("SEED_ON_STARTUP", "sometimes");
        assert!(AppConfig::from_service(&service).is_err());
    }
}
