//! 运行时：事件循环与副作用执行
//!
//! 分析请求在独立的 tokio 任务中执行，结果通过 inbox 通道送回主循环。

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::client::AnalysisClient;
use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::terminal::Tui;
use crate::ui::{self, App, Effect};

/// 等待终端事件的轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 异步任务发回主循环的事件
#[derive(Debug)]
pub enum UiEvent {
    AnalysisFinished {
        request_id: Uuid,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}

/// 在后台执行一次分析
pub fn spawn_analysis(
    client: AnalysisClient,
    request: AnalysisRequest,
    inbox: UnboundedSender<UiEvent>,
) -> JoinHandle<()> {
    let request_id = request.id;
    spawn_completion(
        request_id,
        async move { client.analyze(&request).await },
        inbox,
    )
}

/// 运行请求 future，并向 inbox 发送恰好一个完成事件
///
/// future panic 或被中止时，结果记为 `AnalysisError::Task`。
pub fn spawn_completion<F>(
    request_id: Uuid,
    analysis: F,
    inbox: UnboundedSender<UiEvent>,
) -> JoinHandle<()>
where
    F: Future<Output = Result<AnalysisResult, AnalysisError>> + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = match tokio::spawn(analysis).await {
            Ok(outcome) => outcome,
            Err(e) => Err(AnalysisError::Task(e.to_string())),
        };

        if inbox
            .send(UiEvent::AnalysisFinished {
                request_id,
                outcome,
            })
            .is_err()
        {
            debug!(%request_id, "inbox closed before analysis finished");
        }
    })
}

/// 将一个 inbox 事件应用到状态
pub fn apply_event(app: &mut App, event: UiEvent) {
    match event {
        UiEvent::AnalysisFinished {
            request_id,
            outcome,
        } => app.complete(request_id, outcome),
    }
}

/// 执行副作用；返回 true 表示退出
pub fn execute_effect(
    effect: Effect,
    client: &AnalysisClient,
    inbox: &UnboundedSender<UiEvent>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::Analyze(request) => {
            spawn_analysis(client.clone(), request, inbox.clone());
            false
        }
    }
}

/// 主循环
pub fn run_app(terminal: &mut Tui, app: &mut App, client: &AnalysisClient) -> Result<()> {
    let (inbox_tx, mut inbox_rx) = mpsc::unbounded_channel::<UiEvent>();

    info!(endpoint = client.endpoint(), "event loop started");
    loop {
        while let Ok(event) = inbox_rx.try_recv() {
            apply_event(app, event);
        }

        terminal.draw(|f| ui::render(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let effect = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key),
            Event::Paste(text) => ui::handle_paste_event(app, text),
            _ => None,
        };

        if let Some(effect) = effect {
            if execute_effect(effect, client, &inbox_tx) {
                info!("quit requested");
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECTION_ERROR_MESSAGE;
    use crate::ui::AnalysisState;

    #[tokio::test]
    async fn test_quit_effect_stops_loop() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(execute_effect(Effect::Quit, &AnalysisClient::default(), &tx));
    }

    #[tokio::test]
    async fn test_failed_analysis_still_delivers_one_event() {
        let mut app = App::new("http://127.0.0.1:1/analyze");
        let client = AnalysisClient::new("http://127.0.0.1:1/analyze");
        let (tx, mut rx) = mpsc::unbounded_channel();

        let request = app.submit("hello").unwrap();
        assert!(!execute_effect(Effect::Analyze(request), &client, &tx));
        drop(tx);

        let event = rx.recv().await.expect("completion event");
        apply_event(&mut app, event);
        assert!(rx.recv().await.is_none());

        assert_eq!(
            app.analysis,
            AnalysisState::Failed(CONNECTION_ERROR_MESSAGE.to_string())
        );
        assert!(!app.is_loading());
    }

    async fn exploding_analysis() -> Result<AnalysisResult, AnalysisError> {
        panic!("analysis task blew up")
    }

    #[tokio::test]
    async fn test_panicking_analysis_still_leaves_submitting() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        let (tx, mut rx) = mpsc::unbounded_channel();

        let request = app.submit("hello").unwrap();
        let handle = spawn_completion(request.id, exploding_analysis(), tx);
        handle.await.unwrap();

        let event = rx.recv().await.expect("completion event");
        assert!(matches!(
            &event,
            UiEvent::AnalysisFinished { outcome: Err(AnalysisError::Task(_)), .. }
        ));
        apply_event(&mut app, event);
        assert!(rx.recv().await.is_none());

        assert_eq!(
            app.analysis,
            AnalysisState::Failed(CONNECTION_ERROR_MESSAGE.to_string())
        );
        assert!(!app.is_loading());
    }
}
