//! 通用 UI 组件
//!
//! 输入框、情感标签、话题徽章等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::{AnalysisResult, SentimentTone};

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// 情感标签对应的颜色
pub fn sentiment_color(tone: SentimentTone) -> Color {
    match tone {
        SentimentTone::Positive => Color::Green,
        SentimentTone::Alternate => Color::Red,
    }
}

/// [组件] 首字母大写、按情感着色的标签
pub fn sentiment_span(result: &AnalysisResult) -> Span<'static> {
    Span::styled(
        result.sentiment_label(),
        Style::default()
            .fg(sentiment_color(result.sentiment_tone()))
            .add_modifier(Modifier::BOLD),
    )
}

/// [组件] 话题徽章，按原顺序排列
pub fn topic_badges(topics: &[String]) -> Line<'static> {
    let badge = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut spans = Vec::with_capacity(topics.len() * 2);
    for (i, topic) in topics.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {topic} "), badge));
    }
    Line::from(spans)
}
