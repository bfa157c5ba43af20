use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::DEFAULT_ENDPOINT;
use crate::error::ConfigError;

/// 覆盖端点的环境变量
pub const ENDPOINT_ENV: &str = "INSIGHTSTREAM_ENDPOINT";

/// 应用配置 (config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 分析服务地址
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// 从默认位置加载，并应用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    /// 从指定文件加载；文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validated()
    }

    /// 非空的覆盖值优先于文件中的端点
    pub fn with_endpoint_override(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(endpoint) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            Ok(self)
        } else {
            Err(ConfigError::InvalidEndpoint(self.endpoint))
        }
    }
}

/// 配置文件路径 (~/.config/insightstream/config.toml)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("insightstream").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/analyze");
    }

    #[test]
    fn test_endpoint_read_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = \"http://analysis.local:9000/analyze\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "http://analysis.local:9000/analyze");
    }

    #[test]
    fn test_empty_file_keeps_default_endpoint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = \"ftp://nope\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_env_override_wins_unless_blank() {
        let overridden = Config::default()
            .with_endpoint_override(Some("https://example.test/analyze".to_string()))
            .unwrap();
        assert_eq!(overridden.endpoint, "https://example.test/analyze");

        let untouched = Config::default()
            .with_endpoint_override(Some("   ".to_string()))
            .unwrap();
        assert_eq!(untouched, Config::default());
    }
}
