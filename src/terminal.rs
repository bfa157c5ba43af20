//! 终端生命周期
//!
//! 进入/退出备用屏幕与原始模式；panic 时同样恢复终端。

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 设置终端；调用前先 `install_panic_hook()`
///
/// 进入原始模式后的任一步失败都会先恢复终端。
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    restore_on_error(enter_screen(), || {
        let _ = restore_terminal();
    })
}

fn enter_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// 失败时执行 `restore` 后原样返回错误
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// 恢复终端，可重复调用
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

/// panic 时先恢复终端再输出 panic 信息
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_only_on_error() {
        let restored = Cell::new(0);

        let ok = restore_on_error(Ok(7), || restored.set(restored.get() + 1));
        assert_eq!(ok.unwrap(), 7);
        assert_eq!(restored.get(), 0);

        let err: Result<()> = restore_on_error(Err(anyhow::anyhow!("alternate screen failed")), || {
            restored.set(restored.get() + 1)
        });
        assert_eq!(err.unwrap_err().to_string(), "alternate screen failed");
        assert_eq!(restored.get(), 1);
    }
}
