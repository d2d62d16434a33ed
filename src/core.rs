use anyhow::Result;
use log::error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::tui::events::InputHandler;
use crate::tui::models::Event;

pub(crate) mod prober;
pub(crate) mod registry;
pub(crate) mod reload;
pub(crate) mod scheduler;
pub(crate) mod target;

pub(crate) use prober::TcpProber;
pub(crate) use registry::TargetRegistry;
pub(crate) use reload::ReloadTrigger;
pub(crate) use scheduler::Scheduler;
pub(crate) use target::TargetEntry;

/// 端末を監視画面に切り替え、終了が要求されるまで監視を続ける
pub(crate) async fn run_dashboard(
    registry: TargetRegistry,
    targets: Vec<TargetEntry>,
    settings: Settings,
    banner: String,
) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let token = CancellationToken::new();

    // シグナルハンドラは端末を切り替える前に登録する
    let _reload_trigger = ReloadTrigger::spawn(token.clone(), tx.clone())?;

    let terminal = ratatui::init();
    let _input_handler = InputHandler::spawn(token.clone(), tx);

    let scheduler = Scheduler::new(TcpProber, terminal, registry, targets, settings, banner, rx);
    let result = scheduler.run().await;

    ratatui::restore();
    token.cancel();

    result.map_err(|e| {
        error!("Error has occurred in monitoring: {e}");
        e.into()
    })
}
