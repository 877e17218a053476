//! 配置基础设施
//!
//! 所有配置都来自环境变量，缺省时使用内置默认值：
//! - `HOST`：监听地址，默认 `0.0.0.0`
//! - `PORT`：监听端口，默认 `3000`
//! - `API_KEY`：共享密钥，默认 `123456`（仅用于本地开发）

use std::env;
use std::net::Ipv4Addr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_KEY: &str = "123456";

/// 配置错误类型
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", &DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;
        let api_key = env_or_default("API_KEY", DEFAULT_API_KEY);

        Ok(Self {
            host,
            port,
            api_key,
        })
    }

    /// "host:port" 形式的监听地址
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
