//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Effect};
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, loading: bool, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('j') if !loading && *mode == AppMode::Editing => Some(Action::Newline),
            _ => None,
        };
    }

    // 请求在途时输入被禁用
    if loading {
        return match (mode, key.code) {
            (AppMode::Normal, KeyCode::Char('q')) => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('i') | KeyCode::Char('e') => Some(Action::StartEditing),
            KeyCode::Char('c') => Some(Action::ClearInput),
            KeyCode::Enter => Some(Action::Submit),
            _ => None,
        },
        AppMode::Editing => match key.code {
            KeyCode::Esc => Some(Action::StopEditing),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Effect> {
    get_action(&app.mode, app.is_loading(), key).and_then(|action| app.dispatch(action))
}

/// 处理粘贴事件
pub fn handle_paste_event(app: &mut App, text: String) -> Option<Effect> {
    app.dispatch(Action::Paste(text))
}
