use anyhow::Result;
use config::Settings;
use env_logger::Env;
use log::error;

use crate::cli::Cli;
use crate::core::TargetRegistry;

mod cli;
mod config;
mod core;
mod net_utils;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(all(debug_assertions, feature = "tokio-console"))]
    console_subscriber::init();
    env_logger::init_from_env(Env::default().default_filter_or("error"));
    color_eyre::install().map_err(|e| {
        error!("Failed to install color_eyre: {e}");
        anyhow::anyhow!("Failed to install color_eyre")
    })?;

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // 起動時に設定ファイルが読めない場合は画面を切り替える前に終了する
    let registry = TargetRegistry::new(&cli.config, settings.timeout);
    let mut targets = Vec::new();
    registry.reconcile(&mut targets)?;

    let banner = net_utils::host_banner().await;

    core::run_dashboard(registry, targets, settings, banner).await
}
