//! Action 与 Effect 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action；需要副作用的结果以 Effect 交给运行时执行

use crate::models::AnalysisRequest;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    StartEditing, // i / e
    StopEditing,  // Esc
    ClearInput,   // c

    Submit,      // Enter
    Input(char), // 输入字符
    Newline,     // Ctrl+J
    Paste(String),
    DeleteChar,  // Backspace
}

/// 交给运行时的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Quit,
    Analyze(AnalysisRequest),
}
