use anyhow::{Context, Result};
use tracing::{error, info};

use insightstream::ui::App;
use insightstream::{AnalysisClient, Config, logging, runtime, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 日志写入 ~/.local/share/insightstream/insightstream.log
    let log_dir = logging::data_dir()?;
    let _guard = logging::init(&log_dir)?;

    let config = Config::load().context("Failed to load configuration")?;
    info!(endpoint = %config.endpoint, "starting insightstream");

    let client = AnalysisClient::new(config.endpoint.clone());
    let mut app = App::new(config.endpoint);

    // 设置终端
    terminal::install_panic_hook();
    let mut tui = terminal::setup_terminal()?;

    // 主循环
    let result = runtime::run_app(&mut tui, &mut app, &client);

    // 恢复终端
    terminal::restore_terminal()?;
    tui.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "event loop exited with error");
    }
    result
}
