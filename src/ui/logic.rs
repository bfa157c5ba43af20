//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑与请求生命周期状态机

use chrono::Local;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::actions::{Action, Effect};
use super::state::{AnalysisState, App, AppMode};
use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => return Some(Effect::Quit),

            Action::StartEditing => self.mode = AppMode::Editing,
            Action::StopEditing => self.mode = AppMode::Normal,
            Action::ClearInput => {
                if !self.is_loading() {
                    self.input_buffer.clear();
                }
            }

            Action::Submit => {
                let input = self.input_buffer.clone();
                return self.submit(&input).map(Effect::Analyze);
            }

            Action::Input(c) => self.push_char(c),
            Action::Newline => self.push_char('\n'),
            Action::Paste(text) => {
                if self.mode == AppMode::Editing && !self.is_loading() {
                    self.input_buffer.push_str(&text.replace("\r\n", "\n"));
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Editing && !self.is_loading() {
                    self.input_buffer.pop();
                }
            }
        }
        None
    }

    fn push_char(&mut self, c: char) {
        if self.mode == AppMode::Editing && !self.is_loading() {
            self.input_buffer.push(c);
        }
    }

    // ============ 请求生命周期 ============

    /// 提交输入；返回需要发出的请求
    ///
    /// 空白输入直接失败且不发请求；已有请求在途时拒绝本次提交。
    pub fn submit(&mut self, input: &str) -> Option<AnalysisRequest> {
        if let AnalysisState::Submitting { request_id } = &self.analysis {
            debug!(%request_id, "submit rejected, request already in flight");
            self.message = Some("An analysis is already running".to_string());
            return None;
        }

        let Some(request) = AnalysisRequest::from_input(input) else {
            debug!("submit rejected, empty input");
            self.analysis =
                AnalysisState::Failed(AnalysisError::Validation.user_message().to_string());
            self.message = None;
            return None;
        };

        info!(request_id = %request.id, chars = request.text.len(), "submitting feedback");
        self.analysis = AnalysisState::Submitting {
            request_id: request.id,
        };
        self.message = None;
        Some(request)
    }

    /// 请求结束（成功或失败），离开 Submitting
    pub fn complete(&mut self, request_id: Uuid, outcome: Result<AnalysisResult, AnalysisError>) {
        match &self.analysis {
            AnalysisState::Submitting { request_id: current } if *current == request_id => {}
            _ => {
                warn!(%request_id, "ignoring completion for a request that is not in flight");
                return;
            }
        }

        self.analysis = match outcome {
            Ok(result) => {
                info!(%request_id, sentiment = %result.sentiment, "analysis succeeded");
                AnalysisState::Success(result)
            }
            Err(err) => {
                warn!(%request_id, error = %err, "analysis failed");
                AnalysisState::Failed(err.user_message().to_string())
            }
        };
        self.message = None;
        self.finished_at = Some(Local::now());
    }
}
