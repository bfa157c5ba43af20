//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{AnalysisState, App, AppMode};
use crate::models::AnalysisResult;
use components::{render_input_widget, sentiment_span, topic_badges};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(8), // 输入
            Constraint::Length(3), // 提交按钮
            Constraint::Min(8),    // 结果 / 错误
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_feedback_input(frame, app, chunks[1]);
    render_submit(frame, app, chunks[2]);
    match &app.analysis {
        AnalysisState::Success(result) => render_result(frame, result, chunks[3]),
        AnalysisState::Failed(message) => render_error(frame, message, chunks[3]),
        AnalysisState::Idle | AnalysisState::Submitting { .. } => {}
    }
    render_help(frame, app, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "InsightStream AI",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Turn customer feedback into actionable insights",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_feedback_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == AppMode::Editing && !app.is_loading();
    if app.input_buffer.is_empty() && !focused {
        let placeholder = Paragraph::new("Paste your customer's feedback here...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("Feedback").borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }
    render_input_widget(
        frame,
        area,
        "Feedback",
        &app.input_buffer,
        focused,
        Color::Yellow,
    );
}

fn render_submit(frame: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.is_loading() {
        ("Analyzing...", Style::default().fg(Color::DarkGray))
    } else {
        (
            "[Enter] Analyze Feedback",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn render_result(frame: &mut Frame, result: &AnalysisResult, area: Rect) {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Sentiment", heading)),
        Line::from(sentiment_span(result)),
        Line::default(),
        Line::from(Span::styled("Main topics", heading)),
        topic_badges(&result.topics),
        Line::default(),
        Line::from(Span::styled("Summary", heading)),
        Line::from(result.summary.as_str()),
        Line::default(),
        Line::from(Span::styled(
            "💡 Actionable insight",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.actionable_insight.as_str(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let details = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Analysis result")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(details, area);
}

fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(error, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_loading() {
        match app.mode {
            AppMode::Editing => "Waiting for the analysis server...  [Ctrl+C] quit",
            AppMode::Normal => "Waiting for the analysis server...  [q/Ctrl+C] quit",
        }
    } else {
        match app.mode {
            AppMode::Editing => "[Enter] analyze  [Ctrl+J] newline  [Esc] stop editing",
            AppMode::Normal => "[i] edit  [Enter] analyze  [c] clear  [q] quit",
        }
    };

    let mut text = help_text.to_string();
    if let Some(message) = app.message.as_deref() {
        text.push_str(&format!("  |  {message}"));
    }
    if let Some(finished_at) = app.finished_at {
        text.push_str(&format!("  |  last run {}", finished_at.format("%H:%M:%S")));
    }

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(app.endpoint.as_str()).borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CONNECTION_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// 在某一行中查找文本起始位置
    fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        let needle: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let fits = needle.iter().enumerate().all(|(i, sym)| {
                    let cx = x + i as u16;
                    cx < area.right() && buffer[(cx, y)].symbol() == sym
                });
                if fits {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn sample(sentiment: &str) -> AnalysisResult {
        AnalysisResult {
            sentiment: sentiment.to_string(),
            topics: vec!["billing".to_string(), "support".to_string()],
            summary: "S".to_string(),
            actionable_insight: "I".to_string(),
        }
    }

    #[test]
    fn test_success_renders_positive_branch_and_badges() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        app.analysis = AnalysisState::Success(sample("positivo"));
        let buffer = draw(&app);

        let (x, y) = find_text(&buffer, "Positivo").expect("sentiment label rendered");
        assert_eq!(buffer[(x, y)].fg, Color::Green);

        let (bx, by) = find_text(&buffer, " billing ").expect("billing badge");
        let (sx, sy) = find_text(&buffer, " support ").expect("support badge");
        assert_eq!(by, sy);
        assert!(bx < sx);
        assert_eq!(buffer[(bx + 1, by)].bg, Color::Gray);
    }

    #[test]
    fn test_negative_sentiment_uses_alternate_branch() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        app.analysis = AnalysisState::Success(sample("negativo"));
        let buffer = draw(&app);

        let (x, y) = find_text(&buffer, "Negativo").expect("sentiment label rendered");
        assert_eq!(buffer[(x, y)].fg, Color::Red);
    }

    #[test]
    fn test_error_banner_shown_without_result() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        app.analysis = AnalysisState::Failed(VALIDATION_ERROR_MESSAGE.to_string());
        let buffer = draw(&app);

        assert!(find_text(&buffer, VALIDATION_ERROR_MESSAGE).is_some());
        assert!(find_text(&buffer, "Analysis result").is_none());

        app.analysis = AnalysisState::Failed(CONNECTION_ERROR_MESSAGE.to_string());
        assert!(find_text(&draw(&app), "Could not reach").is_some());
    }

    #[test]
    fn test_submitting_shows_loading_label() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        app.input_buffer = "text".to_string();
        app.submit("text").unwrap();
        let buffer = draw(&app);

        assert!(find_text(&buffer, "Analyzing...").is_some());
        assert!(find_text(&buffer, "Analyze Feedback").is_none());
    }

    #[test]
    fn test_loading_help_lists_quit_keys_per_mode() {
        let mut app = App::new("http://127.0.0.1:8000/analyze");
        app.submit("text").unwrap();
        assert!(find_text(&draw(&app), "[Ctrl+C] quit").is_some());

        app.mode = AppMode::Normal;
        assert!(find_text(&draw(&app), "[q/Ctrl+C] quit").is_some());
    }
}
