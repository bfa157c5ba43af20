//! 分析服务 HTTP 客户端
//!
//! 单次请求、单次响应：POST JSON，非 2xx 或解析失败均视为失败。

use tracing::{debug, instrument};

use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};

/// 默认分析端点
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// 分析服务客户端
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 发送一次分析请求并等待唯一的响应
    #[instrument(skip_all, fields(request_id = %request.id))]
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!(endpoint = %self.endpoint, chars = request.text.len(), "sending analysis request");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status));
        }

        let body = response.text().await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        debug!(topics = result.topics.len(), "analysis response decoded");
        Ok(result)
    }
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
