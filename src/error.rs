//! 错误类型定义

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// 输入为空时展示的提示
pub const VALIDATION_ERROR_MESSAGE: &str = "Please provide input text";

/// 所有请求失败共用的提示
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Could not reach the analysis server. Check that the backend is running and reachable.";

/// 一次分析提交可能出现的错误
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input is empty")]
    Validation,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analysis server returned {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("analysis task aborted: {0}")]
    Task(String),
}

impl AnalysisError {
    /// 面向用户的提示；除校验错误外统一为连接失败
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::Validation => VALIDATION_ERROR_MESSAGE,
            _ => CONNECTION_ERROR_MESSAGE,
        }
    }
}

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid endpoint {0:?}")]
    InvalidEndpoint(String),
}
