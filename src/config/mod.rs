#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HIPER_API_ENDPOINT: &str = "https://api.hiper.com.br/v1/pedidos";
pub const PLACEHOLDER_HIPER_API_KEY: &str = "SUA_CHAVE_DE_API_HIPER";
pub const PLACEHOLDER_MERCUS_API_KEY: &str = "SUA_CHAVE_DE_API_MERCUS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub hiper_api_endpoint: String,
    pub hiper_api_key: String,
    /// 保留給 Mercus API，目前未使用
    pub mercus_api_key: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            hiper_api_endpoint: DEFAULT_HIPER_API_ENDPOINT.to_string(),
            hiper_api_key: PLACEHOLDER_HIPER_API_KEY.to_string(),
            mercus_api_key: PLACEHOLDER_MERCUS_API_KEY.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 由任意 key 查詢函式建立配置（測試時可注入假的環境）
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // 空字串視同未設定，沿用預設值
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| BridgeError::InvalidConfigValueError {
                    field: "PORT".to_string(),
                    value: raw.clone(),
                    reason: format!("{}", e),
                })?,
            None => defaults.port,
        };

        let request_timeout_seconds = match lookup("HIPER_TIMEOUT_SECONDS") {
            Some(raw) => Some(raw.trim().parse().map_err(|e| {
                BridgeError::InvalidConfigValueError {
                    field: "HIPER_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: format!("{}", e),
                }
            })?),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            hiper_api_endpoint: lookup("HIPER_API_ENDPOINT").unwrap_or(defaults.hiper_api_endpoint),
            hiper_api_key: lookup("HIPER_API_KEY").unwrap_or(defaults.hiper_api_key),
            mercus_api_key: lookup("MERCUS_API_KEY").unwrap_or(defaults.mercus_api_key),
            request_timeout_seconds,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| BridgeError::InvalidConfigValueError {
            field: "HOST".to_string(),
            value: self.host.clone(),
            reason: "Not a valid IP address".to_string(),
        })
    }
}

impl ConfigProvider for AppConfig {
    fn hiper_api_endpoint(&self) -> &str {
        &self.hiper_api_endpoint
    }

    fn hiper_api_key(&self) -> &str {
        &self.hiper_api_key
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hiper_api_endpoint", &self.hiper_api_endpoint)?;
        validate_non_empty_string("hiper_api_key", &self.hiper_api_key)?;
        validate_positive_number("port", u64::from(self.port), 1)?;
        self.socket_addr()?;

        if let Some(timeout) = self.request_timeout_seconds {
            validate_range("request_timeout_seconds", timeout, 1, 300)?;
        }

        if self.hiper_api_key == PLACEHOLDER_HIPER_API_KEY {
            tracing::warn!("⚠️ HIPER_API_KEY is not set, using the placeholder key");
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
