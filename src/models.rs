use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 情感标签中唯一被特殊处理的取值
pub const POSITIVE_SENTIMENT: &str = "positivo";

/// 一次分析请求，提交时由当前输入构造
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    #[serde(skip)]
    pub id: Uuid,
    pub text: String,
}

impl AnalysisRequest {
    /// 由输入构造请求；去除首尾空白后为空则返回 None
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
        })
    }
}

/// 分析服务返回的结构化结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    #[serde(rename = "topicos")]
    pub topics: Vec<String>,
    #[serde(rename = "sumario")]
    pub summary: String,
    #[serde(rename = "insight_acionavel")]
    pub actionable_insight: String,
}

/// 情感的显示分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Positive,
    Alternate, // 包括未知标签
}

impl AnalysisResult {
    /// 首字母大写后的情感标签
    pub fn sentiment_label(&self) -> String {
        capitalize(&self.sentiment)
    }

    pub fn sentiment_tone(&self) -> SentimentTone {
        if self.sentiment == POSITIVE_SENTIMENT {
            SentimentTone::Positive
        } else {
            SentimentTone::Alternate
        }
    }
}

/// 仅将第一个字符转为大写，其余保持不变
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
