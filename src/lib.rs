//! InsightStream：客户反馈情感分析终端客户端

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod terminal;
pub mod ui;

pub use client::AnalysisClient;
pub use config::Config;
pub use error::{AnalysisError, ConfigError};
pub use models::{AnalysisRequest, AnalysisResult, SentimentTone};
