//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::models::AnalysisResult;

/// 应用状态
pub struct App {
    pub input_buffer: String,
    pub mode: AppMode,
    pub analysis: AnalysisState,
    pub message: Option<String>,
    pub endpoint: String,
    pub finished_at: Option<DateTime<Local>>, // 最近一次提交结束的时间
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Editing,
}

/// 请求生命周期状态；结果与错误互斥
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Submitting {
        request_id: Uuid,
    },
    Success(AnalysisResult),
    Failed(String),
}

impl AnalysisState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, AnalysisState::Submitting { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl App {
    /// 创建新的应用实例，初始即处于输入模式
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            input_buffer: String::new(),
            mode: AppMode::Editing,
            analysis: AnalysisState::Idle,
            message: None,
            endpoint: endpoint.into(),
            finished_at: None,
        }
    }

    /// 是否有请求在途
    pub fn is_loading(&self) -> bool {
        self.analysis.is_submitting()
    }
}
