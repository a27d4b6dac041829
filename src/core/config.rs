//! 服务配置

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// 覆盖存储文件路径的环境变量
pub const FILE_ENV: &str = "PRODUCTS_FILE";
/// 覆盖 HTTP 端口的环境变量
pub const PORT_ENV: &str = "PRODUCTS_PORT";

/// 产品服务配置结构
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 存储配置
    pub storage: StorageConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 产品 JSON 文件路径，相对路径以进程工作目录为准
    pub file_path: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            timeout_seconds: 30,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("products.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(FILE_ENV) {
            self.storage.file_path = PathBuf::from(path);
        }
        if let Some(port) = lookup(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.http.port = port,
                Err(_) => warn!("忽略无效的 {}: {}", PORT_ENV, port),
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }
        if self.storage.file_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("产品文件路径不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并应用环境变量覆盖
///
/// 日志尚未初始化，这里的提示直接输出到标准输出。
pub fn load_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    let mut config = match config_paths.iter().find(|path| Path::new(path).exists()) {
        Some(path) => {
            println!("从配置文件加载: {}", path);
            Config::load_from_file(path)?
        }
        None => {
            println!("未找到配置文件，使用默认配置");
            Config::default()
        }
    };

    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}
